use id3tree::config::Config;
use id3tree::decision_tree::DecisionTree;
use id3tree::input::load;
use id3tree::session::{classify_samples, prompt_file_name};

use std::env;
use std::io;
use std::process;

use log::info;

fn fail(msg: &str) -> ! {
    eprintln!("{}", msg);
    process::exit(1);
}

pub fn main() {
    pretty_env_logger::init();

    // id3tree [data.csv] [config.json]
    let args: Vec<String> = env::args().collect();
    let cfg = match args.get(2) {
        Some(path) => Config::load(path)
            .unwrap_or_else(|e| fail(&format!("Failed to read config: {}", e))),
        None => Config::new(),
    };
    if cfg.debug {
        info!("config:\n{}", cfg.to_string());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let train_file = match args.get(1) {
        Some(name) => name.clone(),
        None => match prompt_file_name(&mut input, &mut output) {
            Ok(Some(name)) => name,
            Ok(None) => return,
            Err(e) => fail(&format!("Failed to read file name: {}", e)),
        },
    };

    let (headers, train_dv) = load(&train_file, cfg.input)
        .unwrap_or_else(|e| fail(&format!("Failed to read file: {}", e)));

    let mut tree = DecisionTree::with_config(&cfg);
    if let Err(e) = tree.fit(&headers, &train_dv) {
        fail(&format!("Failed to build the tree: {}", e));
    }
    println!("\nDecision Tree:");
    tree.print();

    if let Err(e) = classify_samples(&tree, &mut input, &mut output) {
        fail(&format!("Failed to read sample: {}", e));
    }
}
