use miniid3::prelude::*;
use miniid3::research::HoldoutExperiment;

use std::env;


fn votes() -> Sample {
    let mut path = env::current_dir().unwrap();
    path.push("tests/dataset/votes.data");

    SampleReader::new()
        .file(path)
        .has_header(false)
        .target_column(0)
        .read()
        .unwrap()
}


/// Tests for `HoldoutExperiment`.
#[cfg(test)]
pub mod holdout_tests {
    use super::*;

    #[test]
    fn holdout_votes() {
        let sample = votes();
        let id3 = Id3Builder::new()
            .default_label("democrat")
            .build();

        let report = HoldoutExperiment::new(&sample)
            .train_size(20)
            .rounds(5)
            .seed(777)
            .verbose(true)
            .run(&id3);

        assert_eq!(report.rounds(), 5);
        assert_eq!(report.train_size, 20);
        assert_eq!(report.valid_size, 6);
        assert_eq!(report.test_size, 54);

        report.with_pruning.iter()
            .chain(report.without_pruning.iter())
            .for_each(|&acc| assert!((0.0..=1.0).contains(&acc)));

        let mean = report.mean_with_pruning();
        assert!((0.0..=1.0).contains(&mean));

        let json = report.to_json().unwrap();
        assert!(json.contains("with_pruning"));
        assert!(json.contains("without_pruning"));
    }

    #[test]
    fn same_seed_same_report() {
        let sample = votes();
        let id3 = Id3Builder::new()
            .default_label("democrat")
            .build();

        let run = |seed| {
            HoldoutExperiment::new(&sample)
                .train_size(30)
                .rounds(3)
                .seed(seed)
                .pruner(Pruner::new().strategy(PruneStrategy::UntilConvergence))
                .run(&id3)
        };
        assert_eq!(run(1234), run(1234));
    }

    #[test]
    #[should_panic]
    fn train_size_too_large() {
        let sample = votes();
        let id3 = Id3Builder::new().build();
        HoldoutExperiment::new(&sample)
            .train_size(60)
            .rounds(1)
            .run(&id3);
    }
}
