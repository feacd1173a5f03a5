/// User-visible strings the session itself injects into the transcript.
/// Anything richer comes from the generation service; these two must
/// work even when every external capability is down.

pub fn greeting(language: &str) -> &'static str {
    match language {
        "hi" => "नमस्ते! मैं आपका वित्तीय सहायक हूँ। आज मैं आपकी कैसे मदद कर सकता हूँ?",
        "es" => "¡Hola! Soy tu asistente financiero. ¿En qué puedo ayudarte hoy?",
        _ => "Hi! I'm your financial assistant. How can I help you today?",
    }
}

pub fn failure_notice(language: &str) -> &'static str {
    match language {
        "hi" => "क्षमा करें, मैं अभी जवाब नहीं दे पा रहा हूँ। कृपया थोड़ी देर बाद पुनः प्रयास करें।",
        "es" => "Lo siento, no puedo responder en este momento. Inténtalo de nuevo en un momento.",
        _ => "Sorry, I couldn't respond right now. Please try again in a moment.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(greeting("fr"), greeting("en"));
        assert_eq!(failure_notice("zz"), failure_notice("en"));
    }

    #[test]
    fn test_localized_variants_differ() {
        assert_ne!(greeting("hi"), greeting("en"));
        assert_ne!(failure_notice("es"), failure_notice("en"));
    }
}
