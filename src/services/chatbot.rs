use rand::Rng;

/// Categories a chat message can classify into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Appointment,
    Procedure,
    Emergency,
    Cost,
    Default,
}

impl Topic {
    pub fn name(self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::Appointment => "appointment",
            Topic::Procedure => "procedure",
            Topic::Emergency => "emergency",
            Topic::Cost => "cost",
            Topic::Default => "default",
        }
    }
}

// Priority order is significant: a message matching several keyword sets
// classifies as the first topic listed here.
const KEYWORD_TABLE: [(Topic, &[&str]); 5] = [
    (Topic::Greeting, &["hello", "hi", "hey", "greetings"]),
    (
        Topic::Appointment,
        &["appointment", "schedule", "booking", "book", "when", "available"],
    ),
    (
        Topic::Procedure,
        &["procedure", "treatment", "extraction", "filling", "root canal", "cleaning"],
    ),
    (
        Topic::Emergency,
        &["emergency", "urgent", "pain", "hurt", "swelling", "bleeding"],
    ),
    (
        Topic::Cost,
        &["cost", "price", "expensive", "insurance", "payment", "bill"],
    ),
];

// Words dropped before extracting a topic phrase for the default reply.
const STOP_WORDS: &[&str] = &[
    "what", "how", "when", "where", "why", "is", "are", "the", "a", "an", "in", "on", "at", "to",
    "for", "with", "by", "me", "about", "your",
];

/// Canned reply candidates for a topic. The default templates carry a
/// `{topic}` placeholder filled with the extracted topic phrase.
pub fn templates(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Greeting => &[
            "Hello! How can I help you today?",
            "Hi there! What can I assist you with?",
            "Welcome! How may I help you with your dental care needs?",
        ],
        Topic::Appointment => &[
            "To schedule an appointment, please contact our front desk at (555) 123-4567 or use our online booking system.",
            "You can book an appointment through our website or by calling our office directly.",
            "For appointment scheduling, you can reach us during business hours at (555) 123-4567.",
        ],
        Topic::Procedure => &[
            "I can provide information about various dental procedures. Which specific procedure would you like to know about?",
            "We offer a wide range of dental procedures. Could you please specify which one you're interested in?",
            "I'd be happy to explain any dental procedure. What would you like to learn about?",
        ],
        Topic::Emergency => &[
            "For dental emergencies, please call our emergency line at (555) 999-8888 immediately.",
            "If you're experiencing a dental emergency, contact our emergency line right away at (555) 999-8888.",
            "In case of a dental emergency, please call (555) 999-8888 for immediate assistance.",
        ],
        Topic::Cost => &[
            "Dental costs vary depending on the procedure and your insurance coverage. Would you like to schedule a consultation to discuss specific costs?",
            "We can provide a detailed cost estimate during your consultation. Would you like to schedule one?",
            "Costs depend on your specific needs and insurance. Let's schedule a consultation to discuss the details.",
        ],
        Topic::Default => &[
            "I understand you're asking about {topic}. Let me help you with that. Could you please provide more specific details?",
            "Regarding {topic}, I'd be happy to assist. What specific information are you looking for?",
            "I can help you with {topic}. Could you please elaborate on your question?",
        ],
    }
}

/// Picks which template to use out of `count` candidates. Injectable so tests
/// can pin the choice and assert exact strings.
pub trait TemplatePicker {
    fn pick(&mut self, count: usize) -> usize;
}

/// Production picker: uniform choice from the thread-local RNG.
pub struct ThreadRngPicker;

impl TemplatePicker for ThreadRngPicker {
    fn pick(&mut self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

/// Classify a message by substring keyword match. First matching topic in
/// priority order wins; no match falls through to `Default`.
pub fn classify(message: &str) -> Topic {
    let lower = message.to_lowercase();
    for (topic, words) in KEYWORD_TABLE {
        if words.iter().any(|w| lower.contains(w)) {
            return topic;
        }
    }
    Topic::Default
}

/// Up to three non-stop-words from the message, joined with single spaces.
/// Empty when the message is empty or all stop words.
pub fn topic_phrase(message: &str) -> String {
    let lower = message.to_lowercase();
    let words: Vec<&str> = lower
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(w))
        .take(3)
        .collect();
    words.join(" ")
}

/// Classify the message and render a canned reply. Total: every input,
/// including the empty string, produces a non-empty reply.
pub fn generate_response(message: &str) -> (Topic, String) {
    generate_response_with(message, &mut ThreadRngPicker)
}

pub fn generate_response_with(message: &str, picker: &mut impl TemplatePicker) -> (Topic, String) {
    let topic = classify(message);
    let candidates = templates(topic);
    let template = candidates[picker.pick(candidates.len())];
    let reply = match topic {
        Topic::Default => template.replace("{topic}", &topic_phrase(message)),
        _ => template.to_string(),
    };
    (topic, reply)
}
