//Copyright (C) 2017-2018 Baidu, Inc. All Rights Reserved.
//
//Redistribution and use in source and binary forms, with or without
//modification, are permitted provided that the following conditions
//are met:
//
// * Redistributions of source code must retain the above copyright
//   notice, this list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright
//   notice, this list of conditions and the following disclaimer in
//   the documentation and/or other materials provided with the
//   distribution.
//
// * Neither the name of Baidu, Inc., nor the names of its
//   contributors may be used to endorse or promote products derived
//   from this software without specific prior written permission.
//
//THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
//"AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
//LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
//A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT
//OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
//SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
//LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; Loss OF USE,
//DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
//THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
//(INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
//OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! An ID3 decision tree for categorical data.
//!
//! The tree is grown by splitting on the feature with the largest information gain until every
//! node is pure or no feature is left, and then classifies new samples by walking the branches
//! that match their feature values.
//!
//! * [decision_tree]: the tree, training and inference
//! * [fitness]: entropy, information gain and split selection
//! * [input]: loading the header and rows of a delimited file
//! * [config]: settings, readable from JSON
//! * [session]: the prompt loop of the interactive classifier
//!
//! [decision_tree]: decision_tree/index.html
//! [fitness]: fitness/index.html
//! [input]: input/index.html
//! [config]: config/index.html
//! [session]: session/index.html

#![allow(clippy::inherent_to_string)]

#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod decision_tree;
pub mod errors;
pub mod fitness;
pub mod input;
pub mod session;

#[cfg(all(test, feature = "enable_training"))]
mod tests {
    #[test]
    fn train_from_file() {
        use crate::decision_tree::DecisionTree;
        use crate::input::{infer, load};

        let train_file = "dataset/weather/small.csv";
        let fmt = infer(train_file).unwrap();
        let (headers, dv) = load(train_file, fmt).unwrap();

        let mut tree = DecisionTree::new();
        tree.fit(&headers, &dv).unwrap();
        tree.print();

        assert_eq!(tree.render(), "[temp = cool]\n  -> yes\n[temp = hot]\n  -> no\n");
        assert_eq!(tree.predict_one(&["sunny", "hot"]), "no");
        assert_eq!(tree.predict_one(&["snowy", "hot"]), "no");
        assert_eq!(tree.predict_one(&["sunny", "warm"]), "Unknown");
    }

    #[test]
    fn config_drives_tree_and_loader() {
        use crate::config::Config;
        use crate::decision_tree::DecisionTree;
        use crate::input::load_csv;

        let cfg =
            Config::from_json(r#"{ "unknown_label": "?", "input": { "delimiter": "|" } }"#).unwrap();
        let (headers, dv) = load_csv("a|label\nx|1\ny|0\n".as_bytes(), cfg.input).unwrap();
        let mut tree = DecisionTree::with_config(&cfg);
        tree.fit(&headers, &dv).unwrap();
        assert_eq!(tree.predict_one(&["x"]), "1");
        assert_eq!(tree.predict_one(&["z"]), "?");
        assert_eq!(tree.unknown_label(), "?");
    }
}
