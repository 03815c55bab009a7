use miniid3::prelude::*;
use miniid3::{build, classify, score};


fn train_abc() -> Vec<Example> {
    vec![
        Example::from([("a", 1), ("b", 0), ("c", 0), ("Class", 1)]),
        Example::from([("a", 1), ("b", 1), ("c", 0), ("Class", 1)]),
        Example::from([("a", 0), ("b", 0), ("c", 0), ("Class", 0)]),
        Example::from([("a", 0), ("b", 1), ("c", 0), ("Class", 1)]),
    ]
}


fn test_abc() -> Vec<Example> {
    vec![
        Example::from([("a", 1), ("b", 0), ("c", 1), ("Class", 1)]),
        Example::from([("a", 1), ("b", 1), ("c", 1), ("Class", 1)]),
        Example::from([("a", 0), ("b", 0), ("c", 1), ("Class", 0)]),
        Example::from([("a", 0), ("b", 1), ("c", 1), ("Class", 0)]),
    ]
}


/// Tests for `Id3`.
#[cfg(test)]
pub mod id3_tests {
    use super::*;

    #[test]
    fn build_and_classify() {
        let mut data = vec![
            Example::from([("a", 1), ("b", 0), ("Class", 1)]),
            Example::from([("a", 1), ("b", 1), ("Class", 1)]),
        ];
        let tree = build(&mut data, 0);

        let example = Example::from([("a", 1), ("b", 0)]);
        assert_eq!(classify(&tree, &example), Some("1"));
    }

    #[test]
    fn build_and_score() {
        let mut train = train_abc();
        let tree = build(&mut train, 0);

        let acc = score(&tree, &train);
        assert_eq!(acc, 1.0, "training accuracy is {acc}");

        let acc = score(&tree, &test_abc());
        assert_eq!(acc, 0.75, "test accuracy is {acc}");
    }

    #[test]
    fn pure_sample_is_a_leaf() {
        let mut train = vec![
            Example::from([("x", "p"), ("y", "s"), ("Class", "yes")]),
            Example::from([("x", "q"), ("y", "t"), ("Class", "yes")]),
            Example::from([("x", "r"), ("y", "s"), ("Class", "yes")]),
        ];
        let tree = build(&mut train, "no");
        assert!(tree.root().is_leaf());
        for example in train.iter() {
            assert_eq!(tree.classify(example), Some("yes"));
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let mut train = train_abc();
        let tree = build(&mut train, 0);
        for example in test_abc().iter() {
            let first = tree.classify(example);
            let second = tree.classify(example);
            assert_eq!(first, second);
        }
        let first = tree.predict_all(&test_abc());
        let second = tree.predict_all(&test_abc());
        assert_eq!(first, second);
    }

    #[test]
    fn score_is_in_unit_interval() {
        let mut train = train_abc();
        let tree = build(&mut train, 0);
        let sets = [train_abc(), test_abc(), test_abc()[..1].to_vec()];
        for examples in sets.iter() {
            let acc = tree.score(examples);
            assert!((0.0..=1.0).contains(&acc), "accuracy {acc} out of range");
        }
    }

    #[test]
    fn unseen_value_falls_back() {
        let mut train = train_abc();
        let tree = build(&mut train, 0);
        assert_eq!(tree.root().split_attribute(), Some("a"));

        // Unseen at the root: majority of all training examples.
        let example = Example::from([("a", 2), ("b", 0)]);
        assert_eq!(tree.classify(&example), tree.root().fallback());
        assert_eq!(tree.classify(&example), Some("1"));

        // Unseen at `a = 0`: majority of the two examples there (tie).
        let example = Example::from([("a", 0), ("b", 5)]);
        assert_eq!(tree.classify(&example), Some("0"));
    }

    #[test]
    fn missing_attribute_falls_back() {
        let mut train = train_abc();
        let tree = build(&mut train, 0);
        let example = Example::from([("b", 1)]);
        assert_eq!(tree.classify(&example), Some("1"));
    }

    #[test]
    fn sample_column_order_breaks_ties() {
        // `a` and `b` have the same gain on these examples.
        let sample = Sample::new(train_abc(), "Class")
            .with_attribute_names(["b", "a", "c"]);
        let order = AttributeOrder::Given(sample.attribute_names().to_vec());

        let mut train = sample.into_examples();
        let tree = Id3Builder::new()
            .attribute_order(order)
            .build()
            .fit(&mut train);
        assert_eq!(tree.root().split_attribute(), Some("b"));
    }

    #[test]
    fn empty_training_set() {
        let tree = build(&mut [], "democrat");
        let example = Example::from([("a", "y")]);
        assert_eq!(tree.classify(&example), Some("democrat"));
        assert_eq!(tree.n_nodes(), 1);
    }

    #[test]
    fn play_tennis() {
        let mut path = std::env::current_dir().unwrap();
        path.push("tests/dataset/play_tennis.csv");

        let sample = SampleReader::new()
            .file(path)
            .has_header(true)
            .target_feature("play")
            .read()
            .unwrap();

        let id3 = Id3Builder::new()
            .default_label("yes")
            .build();
        println!("{id3}");

        let mut train = sample.into_examples();
        let tree = id3.fit(&mut train);

        assert_eq!(tree.root().split_attribute(), Some("outlook"));
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 5);
        assert_eq!(tree.n_nodes(), 8);
        assert_eq!(tree.score(&train), 1.0);

        let example = Example::from([
            ("outlook", "overcast"),
            ("temp", "cool"),
            ("humidity", "high"),
            ("windy", "true"),
        ]);
        assert_eq!(tree.classify(&example), Some("yes"));
    }

    #[test]
    fn to_dot_file() {
        let mut train = train_abc();
        let tree = build(&mut train, 0);

        let mut path = std::env::temp_dir();
        path.push("miniid3_to_dot_file.dot");
        tree.to_dot_file(&path).unwrap();

        let dot = std::fs::read_to_string(&path).unwrap();
        assert!(dot.starts_with("graph DecisionTree {"));
        assert!(dot.contains("label = \"a ?\""));
        std::fs::remove_file(&path).unwrap();
    }
}
