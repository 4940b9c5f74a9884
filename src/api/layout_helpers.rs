pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.56,
            '.' | ',' | ':' | 'i' | 'l' | 'I' => 0.28,
            '(' | ')' | '/' | '-' => 0.36,
            ' ' => 0.28,
            'm' | 'w' | 'M' | 'W' => 0.84,
            ch if ch.is_uppercase() => 0.66,
            _ => 0.54,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Baseline offset that vertically centers a label on an anchor, like a
/// `0.32em` dy shift.
pub(super) fn centered_baseline_offset(font_size_px: f64) -> f64 {
    font_size_px * 0.32
}

#[cfg(test)]
mod tests {
    use super::estimate_label_text_width_px;

    #[test]
    fn wider_text_estimates_wider() {
        let short = estimate_label_text_width_px("Emu", 12.0);
        let long = estimate_label_text_width_px("Speed: 120.0 km/h", 12.0);
        assert!(long > short);
        assert!(estimate_label_text_width_px("", 12.0) >= 12.0);
    }
}
