pub mod chatbot;
pub mod metrics_manager;
