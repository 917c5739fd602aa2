/// Builds the greeting prompt from a style phrase and a length phrase.
pub fn compose(style: &str, length: &str) -> String {
    format!("Say hello in a {style} way. Just {length}.")
}
