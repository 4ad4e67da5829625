//! Practice tips by system and accuracy tier.

use shorthand_types::ShorthandSystem;

fn base_tips(system: ShorthandSystem) -> [&'static str; 3] {
    match system {
        ShorthandSystem::Teeline => [
            "Keep your strokes consistent and flowing",
            "Practice common word outlines daily",
            "Focus on maintaining proper letter proportions",
        ],
        ShorthandSystem::Pitman => [
            "Pay attention to line thickness variations",
            "Practice precise positioning on the line",
            "Master the angle differences between similar sounds",
        ],
        ShorthandSystem::Gregg => [
            "Maintain smooth, curved strokes",
            "Practice size variations for different sounds",
            "Focus on natural writing flow",
        ],
    }
}

fn tier_tips(accuracy: f64) -> [&'static str; 2] {
    if accuracy < 70.0 {
        [
            "Consider adding more training samples",
            "Practice basic symbol recognition",
        ]
    } else if accuracy < 85.0 {
        [
            "Work on connecting strokes smoothly",
            "Practice common word combinations",
        ]
    } else {
        [
            "Focus on speed improvement",
            "Practice complex technical vocabulary",
        ]
    }
}

/// System tips followed by tips for the accuracy tier (<70, 70-84, >=85).
pub fn generate_shorthand_tips(system: ShorthandSystem, accuracy: f64) -> Vec<String> {
    base_tips(system)
        .into_iter()
        .chain(tier_tips(accuracy))
        .map(String::from)
        .collect()
}
