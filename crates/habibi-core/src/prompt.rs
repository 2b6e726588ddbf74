//! Prompt templates for the three guide views.
//!
//! Each builder substitutes one value into a fixed template. The user text is
//! embedded verbatim, without escaping or truncation.

use habibi_types::guide::{Category, PromptStyle};

/// Translator view: English word or phrase to Arabic.
pub fn translation_prompt(style: PromptStyle, text: &str) -> String {
    match style {
        PromptStyle::Detailed => format!(
            "Translate '{text}' to Arabic. Provide: 1. Arabic Script, 2. English Phonetics, 3. A brief usage tip."
        ),
        PromptStyle::Brief => format!("Translate '{text}' to Arabic with pronunciation."),
    }
}

/// Explore view: three picks for a category.
pub fn recommendation_prompt(style: PromptStyle, category: Category) -> String {
    match style {
        PromptStyle::Detailed => format!(
            "List 3 {category} in Dubai. For each, give the name, estimated price in AED, and one 'local' tip."
        ),
        PromptStyle::Brief => format!("List 3 {category} in Dubai."),
    }
}

/// Chat view. The brief style sends the raw user text with no framing.
pub fn chat_prompt(style: PromptStyle, message: &str) -> String {
    match style {
        PromptStyle::Detailed => {
            format!("You are a helpful Dubai travel guide. User asks: {message}")
        }
        PromptStyle::Brief => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_prompt_detailed() {
        let prompt = translation_prompt(PromptStyle::Detailed, "Hello");
        assert_eq!(
            prompt,
            "Translate 'Hello' to Arabic. Provide: 1. Arabic Script, 2. English Phonetics, 3. A brief usage tip."
        );
    }

    #[test]
    fn test_translation_prompt_brief() {
        let prompt = translation_prompt(PromptStyle::Brief, "Where is the mall?");
        assert_eq!(prompt, "Translate 'Where is the mall?' to Arabic with pronunciation.");
    }

    #[test]
    fn test_recommendation_prompt_uses_label() {
        let prompt = recommendation_prompt(PromptStyle::Detailed, Category::BudgetEats);
        assert!(prompt.starts_with("List 3 Budget Eats in Dubai."));
        assert!(prompt.contains("estimated price in AED"));

        let brief = recommendation_prompt(PromptStyle::Brief, Category::HiddenGems);
        assert_eq!(brief, "List 3 Hidden Gems in Dubai.");
    }

    #[test]
    fn test_chat_prompt_styles() {
        assert_eq!(
            chat_prompt(PromptStyle::Detailed, "Where is Burj Khalifa?"),
            "You are a helpful Dubai travel guide. User asks: Where is Burj Khalifa?"
        );
        assert_eq!(
            chat_prompt(PromptStyle::Brief, "Where is Burj Khalifa?"),
            "Where is Burj Khalifa?"
        );
    }

    #[test]
    fn test_user_text_embedded_verbatim() {
        let tricky = "it's {odd} \"text\"\nwith newline";
        for style in [PromptStyle::Detailed, PromptStyle::Brief] {
            assert!(translation_prompt(style, tricky).contains(tricky));
            assert!(chat_prompt(style, tricky).contains(tricky));
        }
    }
}
