use serde::Serialize;
use wasm_bindgen::prelude::*;

use twgloss_core::{IndexedClass, TranslationEntry};
use twgloss_dictionary::{ReverseIndex, Translator, TranslatorOptions};

// ── JS-facing mirror types ────────────────────────────────────

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsTranslation {
    class_name: String,
    css: String,
    css_preview: String,
    description: String,
}

impl JsTranslation {
    fn new(class_name: &str, entry: &TranslationEntry) -> Self {
        Self {
            class_name: class_name.to_string(),
            css: entry.css.clone(),
            css_preview: entry.css_preview().to_string(),
            description: entry.description.clone(),
        }
    }
}

impl From<&IndexedClass> for JsTranslation {
    fn from(item: &IndexedClass) -> Self {
        Self {
            class_name: item.class_name.clone(),
            css: item.css.clone(),
            css_preview: item.css_preview().to_string(),
            description: item.description.clone(),
        }
    }
}

/// One token of a class list. `translation` is absent for unknown classes.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsListItem {
    class_name: String,
    translation: Option<JsTranslation>,
}

fn translate_one(translator: &Translator, class: &str) -> Option<JsTranslation> {
    translator
        .translate(class)
        .map(|entry| JsTranslation::new(class.trim(), &entry))
}

fn translate_all(translator: &Translator, text: &str) -> Vec<JsListItem> {
    translator
        .translate_list(text)
        .into_iter()
        .map(|(class, entry)| JsListItem {
            class_name: class.to_string(),
            translation: entry.map(|entry| JsTranslation::new(class, &entry)),
        })
        .collect()
}

// ── Conversions ───────────────────────────────────────────────

fn parse_options(options: JsValue) -> Result<TranslatorOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(TranslatorOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM exports ──────────────────────────────────────────────

/// Installs the panic hook (called automatically)
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Class lookup and reverse search for the editor integration.
#[wasm_bindgen]
pub struct Glossary {
    translator: Translator,
    index: Option<ReverseIndex>,
}

#[wasm_bindgen]
impl Glossary {
    /// @param options - `{ describeVariants?, maxSearchResults? }`, optional
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Glossary, JsError> {
        let options = parse_options(options)?;
        Ok(Glossary {
            translator: Translator::new().with_options(options),
            index: None,
        })
    }

    /// @returns `{ className, css, cssPreview, description }` or `null`
    pub fn translate(&self, class: &str) -> Result<JsValue, JsError> {
        to_js(&translate_one(&self.translator, class))
    }

    /// Translates a whitespace-separated class list, keeping order and
    /// duplicates.
    ///
    /// @returns `Array<{ className, translation }>`
    #[wasm_bindgen(js_name = "translateList")]
    pub fn translate_list(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&translate_all(&self.translator, text))
    }

    /// @returns `{ responsive, states, core }`
    pub fn decompose(&self, class: &str) -> Result<JsValue, JsError> {
        to_js(&self.translator.decompose(class))
    }

    /// Searches every known class by name, CSS or description. The index
    /// is built on first use.
    ///
    /// @returns `Array<{ className, css, cssPreview, description }>`
    pub fn search(&mut self, term: &str) -> Result<JsValue, JsError> {
        let translator = &self.translator;
        let index = self
            .index
            .get_or_insert_with(|| ReverseIndex::build(translator));
        let results: Vec<JsTranslation> = index.search(term).into_iter().map(Into::into).collect();
        to_js(&results)
    }

    /// Number of classes in the reverse index, building it if needed.
    #[wasm_bindgen(js_name = "indexSize")]
    pub fn index_size(&mut self) -> usize {
        let translator = &self.translator;
        self.index
            .get_or_insert_with(|| ReverseIndex::build(translator))
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translate_one() {
        let translator = Translator::new();
        let item = translate_one(&translator, " -mt-4 ").unwrap();
        assert_eq!(item.class_name, "-mt-4");
        assert_eq!(item.css, "margin-top: -1rem;");
        assert_eq!(item.css_preview, "margin-top: -1rem;");
        assert!(translate_one(&translator, "nope").is_none());
    }

    #[test]
    fn test_translate_all_serializes_unknown_as_null() {
        let items = translate_all(&Translator::new(), "flex nope");
        let json = serde_json::to_value(&items).unwrap();
        assert_eq!(json[0]["className"], "flex");
        assert_eq!(json[0]["translation"]["css"], "display: flex;");
        assert!(json[1]["translation"].is_null());
    }

    #[test]
    fn test_text_size_preview_skips_selector() {
        let item = translate_one(&Translator::new(), "text-xs").unwrap();
        assert!(item.css_preview.starts_with("font-size: var(--text-xs)"));
    }
}
