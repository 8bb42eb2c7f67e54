//! Externally authored components
//!
//! Custom code arrives already validated (non-empty, default export), so
//! it is emitted as-is. Its default export is imported under the allocated
//! file name, whatever the function inside is called.

use sitegen_ir::CustomSection;

pub(super) fn render(section: &CustomSection) -> String {
    let mut code = section.code.clone();
    if !code.ends_with('\n') {
        code.push('\n');
    }
    code
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render;
    use serde_json::json;

    #[test]
    fn code_is_emitted_verbatim() {
        let code = "'use client';\nexport default function Spinner() { return <div />; }";
        let (source, _) = render(json!({"type": "custom", "componentName": "Spinner", "code": code}));
        assert_eq!(source, format!("{code}\n"));
    }
}
