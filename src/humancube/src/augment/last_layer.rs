use crate::{Sample, sample::rewind};
use cubie::{
    CubeState, MoveError,
    geometry::{U_LAYER_CORNERS, U_LAYER_EDGES},
};
use log::debug;

/// Replace the last layer slots of `state` with those of `reference`. No F2L
/// slot is touched.
#[must_use]
pub fn with_last_layer(mut state: CubeState, reference: &CubeState) -> CubeState {
    for slot in U_LAYER_EDGES {
        state.edges[slot] = reference.edges[slot];
    }
    for slot in U_LAYER_CORNERS {
        state.corners[slot] = reference.corners[slot];
    }
    state
}

/// For every sample that reaches F2L, emit `ll_cases` samples with the same
/// F2L solution but a random last layer case waiting after it.
///
/// # Errors
///
/// If a sample contains an invalid move.
pub fn randomize_last_layers(
    samples: &[Sample],
    ll_cases: usize,
    rng: &mut fastrand::Rng,
) -> Result<Vec<Sample>, MoveError> {
    let mut generated = Vec::new();
    if ll_cases == 0 {
        return Ok(generated);
    }
    for (i, sample) in samples.iter().enumerate() {
        let Some(prefix) = sample.f2l_prefix()? else {
            debug!("Sample {i} never solves F2L");
            continue;
        };
        for _ in 0..ll_cases {
            let reference = CubeState::random_last_layer(rng);
            let f2l_state = with_last_layer(prefix.state, &reference);
            generated.push(Sample::new(
                rewind(f2l_state, prefix.moves)?,
                prefix.moves.to_vec(),
            ));
        }
    }
    Ok(generated)
}
