use solex_lexer::{parse_value, OpCodeTable, Tokenizer};

/// Look up an opcode by mnemonic, or by code in decimal or `0x` hex.
///
/// Returns the `name 0xNN` line on success and a message otherwise.
pub fn opcode_lookup(tokenizer: &Tokenizer, query: &str) -> Result<String, String> {
    let table = OpCodeTable::new(tokenizer.catalog());

    if let Some(value) = parse_value(query) {
        let code = u8::try_from(value).map_err(|_| format!("opcode code {value} is out of range"))?;
        return table
            .name(code)
            .map(|name| format!("{name} 0x{code:02x}"))
            .ok_or_else(|| format!("no opcode has code 0x{code:02x}"));
    }

    let name = query.to_ascii_lowercase();
    table
        .code(&name)
        .map(|code| format!("{name} 0x{code:02x}"))
        .ok_or_else(|| format!("unknown opcode `{query}`"))
}
