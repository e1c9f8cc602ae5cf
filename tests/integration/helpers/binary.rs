/// Path to the elm-analyse binary under test.
pub fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_elm-analyse")
}
