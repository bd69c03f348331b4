//! The line-based prompt of the interactive classifier.
//!
//! The functions read answers from any `BufRead` and write prompts to any `Write`, so the binary
//! drives them with stdin/stdout and the tests with in-memory buffers. End of input ends the
//! session.

use crate::decision_tree::DecisionTree;

use std::io::{self, BufRead, Write};

/// Write `prompt`, then read one line. Returns `None` at end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for the name of the training file.
pub fn prompt_file_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    ask(input, output, "Enter name of the CSV file: ")
}

/// Repeatedly offer to classify a sample with `tree` until the user answers `n`.
///
/// On `y` every feature value is asked for in header order and the prediction is written as
/// `Guess: <label name> = <label>`. Any other answer is asked again.
pub fn classify_samples<R: BufRead, W: Write>(
    tree: &DecisionTree,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let label_name = tree.label_name().unwrap_or("label");
    loop {
        let answer = match ask(input, output, "\nWould you like to try another sample (y/n): ")? {
            Some(a) => a.to_lowercase(),
            None => return Ok(()),
        };
        match answer.as_str() {
            "n" => return Ok(()),
            "y" => {
                writeln!(output, "Enter new sample:")?;
                let mut sample = Vec::with_capacity(tree.feature_names().len());
                for feature in tree.feature_names() {
                    match ask(input, output, &format!("{}: ", feature))? {
                        Some(value) => sample.push(value),
                        None => return Ok(()),
                    }
                }
                writeln!(output, "Guess: {} = {}", label_name, tree.predict_one(&sample))?;
            }
            _ => writeln!(output, "Please enter only 'y' or 'n'.")?,
        }
    }
}

#[cfg(all(test, feature = "enable_training"))]
mod tests {
    use super::*;
    use crate::input::{load_csv, InputFormat};

    fn weather_tree() -> DecisionTree {
        let data = "weather,temp,play\nsunny,hot,no\nsunny,cool,yes\nrainy,cool,yes\nrainy,hot,no\n";
        let (headers, dv) = load_csv(data.as_bytes(), InputFormat::csv_format()).unwrap();
        let mut tree = DecisionTree::new();
        tree.fit(&headers, &dv).unwrap();
        tree
    }

    fn run(tree: &DecisionTree, script: &str) -> String {
        let mut output = Vec::new();
        classify_samples(tree, &mut script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn classify_one_sample() {
        let out = run(&weather_tree(), "y\nsunny\nhot\nn\n");
        assert!(out.contains("Enter new sample:\nweather: temp: Guess: play = no\n"));
        assert_eq!(out.matches("Would you like to try another sample").count(), 2);
    }

    #[test]
    fn unseen_value_prints_unknown() {
        let out = run(&weather_tree(), "Y\nsnowy\nwarm\nN\n");
        assert!(out.contains("Guess: play = Unknown\n"));
    }

    #[test]
    fn invalid_answer_asks_again() {
        let out = run(&weather_tree(), "maybe\nn\n");
        assert!(out.contains("Please enter only 'y' or 'n'.\n"));
        assert!(!out.contains("Guess"));
    }

    #[test]
    fn end_of_input_stops() {
        let out = run(&weather_tree(), "y\nsunny\n");
        assert!(!out.contains("Guess"));
        assert_eq!(run(&weather_tree(), ""), "\nWould you like to try another sample (y/n): ");
    }

    #[test]
    fn file_name_prompt() {
        let mut output = Vec::new();
        let name = prompt_file_name(&mut "  data.csv \n".as_bytes(), &mut output).unwrap();
        assert_eq!(name.as_deref(), Some("data.csv"));
        assert_eq!(output, b"Enter name of the CSV file: ");
    }
}
