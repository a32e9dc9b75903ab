/// Input for recipe suggestion: the user's available ingredients.
///
/// Duplicates are harmless (membership is what matters) and an empty list is
/// valid input that simply matches nothing.
#[derive(Debug, Clone, Default)]
pub struct SuggestRecipesInput {
    pub ingredients: Vec<String>,
}
