use floret::{
    DecisionTreeBuilder,
    FloretError,
    Flower,
    Species,
};
use floret::evaluation::{accuracy, holdout};


fn flowers() -> Vec<Flower> {
    vec![
        Flower::new(4.0, 3.0, 1.0, 0.5, Species::Setosa),
        Flower::new(4.2, 3.0, 1.2, 0.5, Species::Setosa),
        Flower::new(6.0, 3.0, 3.0, 0.5, Species::Versicolor),
        Flower::new(6.2, 3.0, 3.2, 0.5, Species::Versicolor),
        Flower::new(6.0, 3.0, 5.0, 0.5, Species::Virginica),
        Flower::new(6.2, 3.0, 5.2, 0.5, Species::Virginica),
    ]
}


#[test]
fn holdout_removes_the_middle_slice() {
    let flowers = flowers();
    let (training, validation) = holdout(&flowers, 2, 4).unwrap();

    assert_eq!(validation, flowers[2..4].to_vec());
    assert_eq!(training.len(), 4);
    assert_eq!(training[..2], flowers[..2]);
    assert_eq!(training[2..], flowers[4..]);
}


#[test]
fn holdout_with_an_empty_validation_slice() {
    let flowers = flowers();
    let (training, validation) = holdout(&flowers, 3, 3).unwrap();

    assert!(validation.is_empty());
    assert_eq!(training, flowers);
}


#[test]
fn holdout_covering_everything_leaves_no_training_set() {
    let flowers = flowers();
    let (training, validation) = holdout(&flowers, 0, flowers.len()).unwrap();

    assert!(training.is_empty());
    assert_eq!(validation, flowers);

    // Growing a tree on the empty remainder must fail explicitly.
    let tree = DecisionTreeBuilder::new().build();
    assert!(matches!(
        tree.fit(&training),
        Err(FloretError::EmptyTrainingSet)
    ));
}


#[test]
fn holdout_rejects_malformed_ranges() {
    let flowers = flowers();

    assert!(matches!(
        holdout(&flowers, 4, 2),
        Err(FloretError::InvalidRange { begin: 4, end: 2, len: 6 })
    ));
    assert!(matches!(
        holdout(&flowers, 0, 7),
        Err(FloretError::InvalidRange { begin: 0, end: 7, len: 6 })
    ));
}


#[test]
fn accuracy_counts_correct_predictions() {
    // A depth-zero tree is a single majority-vote leaf.
    // Setosa is the strict majority here, so the vote is
    // deterministic and the leaf misses the one versicolor.
    let flowers = vec![
        Flower::new(4.0, 3.0, 1.0, 0.5, Species::Setosa),
        Flower::new(4.2, 3.0, 1.2, 0.5, Species::Setosa),
        Flower::new(6.0, 3.0, 3.0, 0.5, Species::Versicolor),
    ];

    let tree = DecisionTreeBuilder::new()
        .max_depth(0)
        .build();
    let f = tree.fit(&flowers).unwrap();

    let report = accuracy(&f, &flowers);
    assert_eq!(report.correct(), 2);
    assert_eq!(report.total(), 3);
    assert_eq!(report.to_string(), "2/3");
    assert!((report.ratio() - 2.0 / 3.0).abs() < 1e-12);
}


#[test]
fn accuracy_of_an_empty_set() {
    let flowers = flowers();
    let tree = DecisionTreeBuilder::new().build();
    let f = tree.fit(&flowers).unwrap();

    let report = accuracy(&f, &[]);
    assert_eq!(report.to_string(), "0/0");
    assert_eq!(report.ratio(), 0.0);
}
