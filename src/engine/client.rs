/// Control surface of the engine's client half: selects which model
/// versions drive each color and how many concurrent games run.
pub trait Client {
    fn set_request(&mut self, black_ver: i64, white_ver: i64, games: i64);
}
