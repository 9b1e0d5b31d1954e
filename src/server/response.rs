use crate::board::Piece;
use crate::moves::Variant;
use crate::session::Observation;
use serde_json::Value;
use serde_json::json;
use std::collections::BTreeSet;

/// Render an observation in the GUI wire shape: seat id, rotation, the
/// valid moves grouped by origin label, and one object per row mapping
/// column index to a piece-state class, suffixed " can_move" on cells a
/// move can start from. American and Russian boards grey out the light
/// squares; Ugolki renders the whole grid playable.
pub fn board(observation: &Observation, variant: Variant, user_id: usize) -> Value {
    let mut root = serde_json::Map::new();
    root.insert("user_id".into(), json!(user_id));
    root.insert("rotate".into(), json!(i64::from(observation.player)));

    let mut grouped = serde_json::Map::new();
    for (from, till) in observation.moves.values() {
        grouped
            .entry(from.to_string())
            .or_insert_with(|| json!([]))
            .as_array_mut()
            .expect("grouped under arrays")
            .push(json!(till.to_string()));
    }
    let origins = grouped.keys().cloned().collect::<BTreeSet<String>>();
    root.insert("valid_moves".into(), Value::Object(grouped));

    for (point, piece) in observation.board.cells() {
        let class = match (piece, variant) {
            (Piece::Empty, Variant::Ugolki) => "piece empty",
            (Piece::Empty, _) if point.dark() => "piece empty",
            (Piece::Empty, _) => "not_game",
            (piece, _) => piece.class(),
        };
        let class = match origins.contains(&point.to_string()) {
            true => format!("{} can_move", class),
            false => class.to_string(),
        };
        root.entry(point.y.to_string())
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .expect("rows are objects")
            .insert(point.x.to_string(), json!(class));
    }
    Value::Object(root)
}
