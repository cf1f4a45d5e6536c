/// Numeric conversion and result formatting.
///
/// This module converts evaluation results to display text. Integral values
/// inside the exactly representable range print without a fractional part;
/// everything else uses the shortest text that parses back to the same
/// `f64`, so a displayed result can be fed straight back into `evaluate`.
pub mod num;
/// Operator glyph normalization.
///
/// Calculator keypads label operators with typographic glyphs such as `×`
/// and `÷`. This module rewrites them to the ASCII operators the grammar
/// accepts before the text reaches the evaluator.
pub mod glyph;
