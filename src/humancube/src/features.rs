//! Model inputs for a cube state.

use cubie::{
    CubeState, Face,
    stickers::{CENTER_INDEX, STICKER_COUNT, StickerCube},
};

/// Centers never move, so only the other 48 stickers are encoded.
pub const ENCODED_STICKERS: usize = STICKER_COUNT - Face::ALL.len();
pub const FEATURE_COUNT: usize = ENCODED_STICKERS * Face::ALL.len();

/// One-hot encode the colour of every non-center sticker.
#[must_use]
pub fn sticker_features(state: &CubeState) -> Vec<f32> {
    let stickers = StickerCube::from(state);
    let mut features = vec![0.0; FEATURE_COUNT];
    let colors = stickers
        .stickers()
        .iter()
        .enumerate()
        .filter(|(index, _)| index % 9 != CENTER_INDEX);
    for (i, (_, &color)) in colors.enumerate() {
        features[i * Face::ALL.len() + color as usize] = 1.0;
    }
    features
}
