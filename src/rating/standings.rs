use super::types::{PlayerName, RatingMap, Standing};

/// Orders the rating map for display: highest rating first, with the
/// roster's insertion order breaking ties.
pub fn standings(roster: &[PlayerName], ratings: &RatingMap) -> Vec<Standing> {
    let mut rows: Vec<Standing> = roster
        .iter()
        .filter_map(|name| {
            ratings.get(name).map(|&rating| Standing {
                player: name.clone(),
                rating,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.rating.cmp(&a.rating));
    rows
}
