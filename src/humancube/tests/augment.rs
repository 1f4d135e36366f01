use cubie::CubeState;
use humancube::{
    AugmentParams, ReconstructedSolve, Sample, SampleSet, augment,
    augment::{cross_skips, crossover, first_skips, randomize_last_layers},
    parse_moves,
    progress::{cross_solved, f2l_solved},
};
use log::info;

fn record(scramble: &str, reconstruction: &str) -> ReconstructedSolve {
    ReconstructedSolve {
        scramble: scramble.to_owned(),
        reconstruction: reconstruction.to_owned(),
        ..Default::default()
    }
}

/// Two short solves that both build the cross before finishing.
fn corpus() -> SampleSet {
    SampleSet::from_records(&[
        record("R U R' F", "F' R U' R'"),
        record("R U R' F U'", "U F' R U' R'"),
        record("", "R U R' U'"),
    ])
}

fn notation(sample: &Sample) -> String {
    sample.notation()
}

#[test_log::test]
fn test_crossover_of_one_solve_reproduces_it() {
    let set = corpus();
    let original = &set.samples()[0];
    let mut rng = fastrand::Rng::with_seed(1);
    let generated = crossover(std::slice::from_ref(original), 4, &mut rng).unwrap();
    assert_eq!(generated.len(), 4);
    for sample in generated {
        assert_eq!(&sample, original);
    }
}

#[test_log::test]
fn test_crossover_samples_are_solved_by_their_moves() {
    let solves = [
        "D R' F2 U R U' R' U' L' U L R U R' U2 F R U R' U' F'",
        "F' D' R U R' U' L U L' y R U' R' U R U R'",
        "R2 D' F U R U2 R' U' y' R U R' U2 L' U L U R U R' U' R' F R F'",
    ];
    let samples = solves
        .iter()
        .map(|solve| Sample::from_solution(parse_moves(solve)).unwrap())
        .collect::<Vec<_>>();

    let mut rng = fastrand::Rng::with_seed(42);
    let generated = crossover(&samples, 200, &mut rng).unwrap();
    assert_eq!(generated.len(), 200);
    for sample in &generated {
        assert!(sample.end_state().unwrap().is_solved(), "{}", notation(sample));
    }
    let novel = generated
        .iter()
        .filter(|sample| !samples.contains(sample))
        .count();
    info!("{novel} of {} crossover samples are new solves", generated.len());
}

#[test_log::test]
fn test_last_layer_cases() {
    let sample =
        Sample::from_solution(parse_moves("F R U D L B R U R' U R U2 R' U")).unwrap();
    let prefix = parse_moves("F R U D L B");

    let mut rng = fastrand::Rng::with_seed(9);
    let generated = randomize_last_layers(std::slice::from_ref(&sample), 3, &mut rng).unwrap();
    assert_eq!(generated.len(), 3);
    for (i, case) in generated.iter().enumerate() {
        assert_eq!(case.moves, prefix);
        assert!(f2l_solved(&case.end_state().unwrap()));
        for other in &generated[i + 1..] {
            assert_ne!(case.start, other.start);
        }
    }
}

#[test_log::test]
fn test_cross_skips() {
    let set = corpus();
    let skipped = cross_skips(set.samples()).unwrap();
    assert_eq!(skipped.len(), 2);

    assert_eq!(skipped[0].start, CubeState::from_scramble("R U R'").unwrap());
    assert_eq!(notation(&skipped[0]), "R U' R'");
    // The second solve needs "U F'" before its cross is done
    assert_eq!(notation(&skipped[1]), "R U' R'");

    for (skip, original) in skipped.iter().zip(set.samples()) {
        assert!(cross_solved(&skip.start));
        assert!(skip.end_state().unwrap().is_solved());
        assert!(skip.moves.len() < original.moves.len());
    }
}

#[test_log::test]
fn test_cross_skip_ignores_solves_starting_with_a_cross() {
    let sample = Sample::from_solution(parse_moves("R U R' U'")).unwrap();
    assert!(cross_solved(&sample.start));
    assert!(cross_skips(&[sample]).unwrap().is_empty());
}

#[test_log::test]
fn test_first_skips() {
    let set = corpus();
    let skipped = first_skips(set.samples()).unwrap();
    // "F'" alone builds the first solve's cross, so only the second one counts
    assert_eq!(skipped.len(), 1);
    assert_eq!(
        skipped[0].start,
        CubeState::from_scramble("R U R' F").unwrap()
    );
    assert_eq!(notation(&skipped[0]), "F' R U' R'");
    assert!(skipped[0].end_state().unwrap().is_solved());

    let empty = Sample::new(CubeState::from_scramble("F").unwrap(), Vec::new());
    assert!(first_skips(&[empty]).unwrap().is_empty());
}

#[test_log::test]
fn test_augment_order_and_counts() {
    let mut set = corpus();
    let seed = set.samples().to_vec();
    let vocabulary_size = set.vocabulary().len();
    let params = AugmentParams {
        crossover: 5,
        ll_cases: 2,
        cross_skips: true,
        first_skips: true,
    };

    let mut rng = fastrand::Rng::with_seed(5);
    let added = augment(&mut set, &params, &mut rng).unwrap();
    assert_eq!(added, 5 + 2 * 2 + 2 + 1);
    assert_eq!(set.len(), seed.len() + added);
    assert_eq!(&set.samples()[..2], &seed[..]);

    let crossover = &set.samples()[2..7];
    let last_layer = &set.samples()[7..11];
    let skips = &set.samples()[11..];
    for sample in crossover {
        assert!(sample.end_state().unwrap().is_solved());
    }
    for sample in last_layer {
        assert!(f2l_solved(&sample.end_state().unwrap()));
    }
    assert_eq!(
        skips.iter().map(|sample| sample.moves.len()).collect::<Vec<_>>(),
        [3, 3, 4]
    );

    assert_eq!(set.vocabulary().len(), vocabulary_size);
    for sample in set.samples() {
        assert!(sample.moves.iter().all(|token| set.vocabulary().contains(token)));
    }
}

#[test_log::test]
fn test_augment_is_reproducible() {
    let params = AugmentParams {
        crossover: 10,
        ll_cases: 3,
        ..Default::default()
    };
    let mut first = corpus();
    let mut second = corpus();
    augment(&mut first, &params, &mut fastrand::Rng::with_seed(77)).unwrap();
    augment(&mut second, &params, &mut fastrand::Rng::with_seed(77)).unwrap();
    assert_eq!(first.samples(), second.samples());
}

#[test_log::test]
fn test_augment_with_nothing_enabled() {
    let mut set = corpus();
    let mut rng = fastrand::Rng::with_seed(0);
    assert_eq!(augment(&mut set, &AugmentParams::default(), &mut rng).unwrap(), 0);
    assert_eq!(set.len(), 2);
}

#[test_log::test]
fn test_shipped_config() {
    let params =
        AugmentParams::from_toml_file(concat!(env!("CARGO_MANIFEST_DIR"), "/../../augment.toml"))
            .unwrap();
    assert!(params.crossover > 0);
    assert!(params.ll_cases > 0);
    assert!(params.cross_skips && params.first_skips);
}
