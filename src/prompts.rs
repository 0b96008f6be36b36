pub const TAGGER_SYSTEM: &str = include_str!("../data/prompts/tagger_system.txt");
pub const TAGGER_IMAGE_HINT: &str = include_str!("../data/prompts/tagger_image_hint.txt");
pub const TAGGER_TEXT_HINT: &str = include_str!("../data/prompts/tagger_text_hint.txt");
pub const TAGGER_TEXT: &str = include_str!("../data/prompts/tagger_text.txt");
pub const CLASSIFIER_SYSTEM: &str = include_str!("../data/prompts/classifier_system.txt");
pub const CLASSIFIER_USER: &str = include_str!("../data/prompts/classifier_user.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
