/// Split the input into tokens on runs of whitespace. Leading and
/// trailing whitespace produce no empty tokens, so blank input yields
/// no tokens at all.
///
/// Tokens are *not* checked here. Deciding whether a token is an
/// operator, an argument, or garbage is left to the parser.
pub fn tokenize(text: &str) -> Vec<String> {
    let tokens: Vec<String> = text.split_whitespace().map(str::to_owned).collect();
    log::debug!("TOKENIZED: {tokens:?}");
    tokens
}
