use std::collections::HashMap;

/// Accumulates generated source text, substituting `@name@` placeholders from a set of named
/// bindings.
///
/// Bindings persist across appends until overwritten by a later `set`; there is no scope
/// nesting. Appending a block that references an unbound placeholder is a programming error and
/// aborts.
#[derive(Debug, Default)]
pub struct SourceGenerator {
    buffer: String,
    bindings: HashMap<String, String>,
}

impl SourceGenerator {
    /// Creates a generator with an empty buffer and no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` for subsequent appends, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.bindings.insert(name.to_string(), value.into());
    }

    /// Appends `block` to the buffer, replacing every `@name@` occurrence with its current
    /// binding.
    pub fn append(&mut self, block: &str) {
        let mut rest = block;
        while let Some(start) = rest.find('@') {
            self.buffer.push_str(&rest[..start]);

            let tail = &rest[start + 1..];
            let end = tail
                .find('@')
                .unwrap_or_else(|| panic!("unterminated placeholder in block {block:?}"));
            let name = &tail[..end];
            let value = self
                .bindings
                .get(name)
                .unwrap_or_else(|| panic!("no binding for placeholder @{name}@"));
            self.buffer.push_str(value);

            rest = &tail[end + 1..];
        }
        self.buffer.push_str(rest);
    }

    /// The text generated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consumes the generator, returning the generated text.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_bound_placeholders() {
        let mut generator = SourceGenerator::new();
        generator.set("name", "Script");
        generator.append("enum class @name@ {");
        assert_eq!(generator.as_str(), "enum class Script {");
    }

    #[test]
    fn bindings_persist_across_appends() {
        let mut generator = SourceGenerator::new();
        generator.set("size", "3");
        generator.append("u32 mapping[@size@];");
        generator.append(" u32 other[@size@];");
        assert_eq!(generator.as_str(), "u32 mapping[3]; u32 other[3];");
    }

    #[test]
    fn later_bindings_override_earlier_ones() {
        let mut generator = SourceGenerator::new();
        generator.set("value", "Lu");
        generator.append("@value@");
        generator.set("value", "Ll");
        generator.append(" @value@");
        assert_eq!(generator.as_str(), "Lu Ll");
    }

    #[test]
    fn appends_literal_text_unchanged() {
        let mut generator = SourceGenerator::new();
        generator.append("static constexpr Array<u32, 4> s_data { {\n} };\n");
        assert_eq!(generator.as_str(), "static constexpr Array<u32, 4> s_data { {\n} };\n");
    }

    #[test]
    #[should_panic(expected = "no binding for placeholder @missing@")]
    fn rejects_unbound_placeholders() {
        let mut generator = SourceGenerator::new();
        generator.append("@missing@");
    }
}
