/// Input for ingredient detection: the raw uploaded image bytes.
#[derive(Debug, Clone)]
pub struct DetectIngredientsInput {
    pub image_data: Vec<u8>,
}

/// Canonicalize a dish label before ingredient lookup.
///
/// Exactly lowercase + spaces-to-underscores. No trimming, no other
/// substitutions; the mapping table keys are already in this form.
pub fn normalize_label(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}
