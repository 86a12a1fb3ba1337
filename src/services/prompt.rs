/// Vibe used when the caller sends nothing
pub const DEFAULT_VIBE: &str =
    "A random selection of cinematographic masterpieces from different genres and eras.";

/// Number of movies the model is asked for
pub const RECOMMENDATION_COUNT: usize = 6;

const SYSTEM_PROMPT: &str = r#"You are the VibeAlchemy Engine.
Your goal is to return 6 movie recommendations based on the user's "vibe".

Instructions:
1.  **Analyze the Vibe:** Look for genre, mood, visual style, or specific keywords (e.g., "minecraft" -> blocky, survival, crafting, pixel art).
2.  **Be Creative:** If the input is odd (e.g., "minecraft,cars"), find movies that share *any* DNA (e.g., "Tron" for digital world, "Mad Max" for vehicles/survival).
3.  **ALWAYS Return JSON:** You must return a valid JSON array. Never refuse.
4.  **Format:** [{"title": "Title", "year": "Year", "reason": "Reason"}].
5.  **No Fluff:** Output ONLY the JSON. No intro, no outro."#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Builds the system/user prompt pair for a vibe
pub fn build(vibe: Option<&str>) -> Prompt {
    let vibe = match vibe {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_VIBE,
    };

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user: format!("Find movies with this vibe: {}", vibe),
    }
}
