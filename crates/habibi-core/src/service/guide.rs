//! GuideService -- translator, explore, and chat use cases.
//!
//! Flow per request: reject blank input, build the prompt, dispatch. For
//! chat, a successful dispatch appends the user and assistant turns to the
//! session and then writes the row pair to the chat log. A failed dispatch
//! touches neither. A failed log write is reported on the exchange but the
//! transcript keeps both turns.

use tracing::{info, warn};

use habibi_types::chat::{ChatExchange, ChatTurn};
use habibi_types::error::GuideError;
use habibi_types::guide::{Category, PromptStyle};

use crate::chat::repository::ChatLogRepository;
use crate::chat::session::ChatSession;
use crate::llm::dispatcher::PromptDispatcher;
use crate::prompt;

pub struct GuideService<R: ChatLogRepository> {
    dispatcher: PromptDispatcher,
    chat_log: R,
    style: PromptStyle,
}

impl<R: ChatLogRepository> GuideService<R> {
    pub fn new(dispatcher: PromptDispatcher, chat_log: R, style: PromptStyle) -> Self {
        Self {
            dispatcher,
            chat_log,
            style,
        }
    }

    pub fn dispatcher(&self) -> &PromptDispatcher {
        &self.dispatcher
    }

    pub fn chat_log(&self) -> &R {
        &self.chat_log
    }

    pub fn style(&self) -> PromptStyle {
        self.style
    }

    /// Translate an English word or phrase to Arabic.
    pub async fn translate(&self, text: &str) -> Result<String, GuideError> {
        let text = non_blank(text)?;
        let prompt = prompt::translation_prompt(self.style, text);
        Ok(self.dispatcher.generate(&prompt).await?)
    }

    /// List three recommendations for a category.
    pub async fn recommend(&self, category: Category) -> Result<String, GuideError> {
        let prompt = prompt::recommendation_prompt(self.style, category);
        Ok(self.dispatcher.generate(&prompt).await?)
    }

    /// Run one chat exchange against `session`.
    ///
    /// Only the latest message is sent; earlier turns are not replayed to the
    /// provider.
    pub async fn chat(
        &self,
        session: &mut ChatSession,
        message: &str,
    ) -> Result<ChatExchange, GuideError> {
        let message = non_blank(message)?;
        let prompt = prompt::chat_prompt(self.style, message);
        let reply = self.dispatcher.generate(&prompt).await?;

        let user = ChatTurn::user(message);
        let assistant = ChatTurn::assistant(reply);
        session.append(user.clone());
        session.append(assistant.clone());

        let storage_error = match self
            .chat_log
            .insert_pair(&user.content, &assistant.content)
            .await
        {
            Ok(()) => None,
            Err(e) => {
                warn!(session_id = %session.id(), error = %e, "Failed to persist chat exchange");
                Some(e.to_string())
            }
        };

        info!(
            session_id = %session.id(),
            turns = session.len(),
            persisted = storage_error.is_none(),
            "Chat exchange completed"
        );

        Ok(ChatExchange {
            user,
            assistant,
            storage_error,
        })
    }
}

/// Trimmed-emptiness check. Returns the input untrimmed so it is sent verbatim.
fn non_blank(text: &str) -> Result<&str, GuideError> {
    if text.trim().is_empty() {
        return Err(GuideError::EmptyInput);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::llm::provider::LlmProvider;
    use habibi_types::chat::TurnRole;
    use habibi_types::error::StorageError;
    use habibi_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};
    use std::sync::{Arc, Mutex};

    // --- Mocks ---

    struct ScriptedProvider {
        reply: Result<String, String>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            match &self.reply {
                Ok(text) => Ok(CompletionResponse {
                    content: text.clone(),
                    model: request.model.clone(),
                    finish_reason: None,
                    usage: Usage::default(),
                }),
                Err(message) => Err(LlmError::Provider {
                    message: message.clone(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct MemoryChatLog {
        rows: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl ChatLogRepository for MemoryChatLog {
        async fn ensure_schema(&self) -> Result<(), StorageError> {
            Ok(())
        }

        async fn insert_pair(&self, user_text: &str, assistant_text: &str) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Query("database is locked".to_string()));
            }
            let mut rows = self.rows.lock().unwrap();
            rows.push(("User".to_string(), user_text.to_string()));
            rows.push(("AI".to_string(), assistant_text.to_string()));
            Ok(())
        }

        async fn count_messages(&self) -> Result<u64, StorageError> {
            Ok(self.rows.lock().unwrap().len() as u64)
        }
    }

    fn service(
        reply: Result<&str, &str>,
        log_fails: bool,
    ) -> (GuideService<MemoryChatLog>, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = ScriptedProvider {
            reply: reply.map(str::to_string).map_err(str::to_string),
            prompts: prompts.clone(),
        };
        let dispatcher = PromptDispatcher::new(BoxLlmProvider::new(provider), "gemini-1.5-flash");
        let log = MemoryChatLog {
            fail: log_fails,
            ..Default::default()
        };
        (GuideService::new(dispatcher, log, PromptStyle::Detailed), prompts)
    }

    // --- Translator ---

    #[tokio::test]
    async fn test_translate_returns_reply_unmodified() {
        let reply = "مرحبا (Marhaba) - a friendly greeting";
        let (svc, prompts) = service(Ok(reply), false);

        let text = svc.translate("Hello").await.unwrap();
        assert_eq!(text, reply);

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Hello"));
    }

    #[tokio::test]
    async fn test_blank_input_never_dispatches() {
        let (svc, prompts) = service(Ok("unused"), false);

        for blank in ["", "   ", "\n\t "] {
            assert!(matches!(svc.translate(blank).await, Err(GuideError::EmptyInput)));
            let mut session = ChatSession::new();
            assert!(matches!(svc.chat(&mut session, blank).await, Err(GuideError::EmptyInput)));
            assert!(session.is_empty());
        }

        assert!(prompts.lock().unwrap().is_empty());
        assert_eq!(svc.chat_log().count_messages().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_translate_dispatch_error() {
        let (svc, _) = service(Err("quota exceeded"), false);
        let err = svc.translate("Thank you").await.unwrap_err();
        assert!(matches!(err, GuideError::Dispatch(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }

    // --- Explore ---

    #[tokio::test]
    async fn test_recommend_uses_category_label() {
        let (svc, prompts) = service(Ok("1. Al Ustad Special Kabab"), false);
        let text = svc.recommend(Category::BudgetEats).await.unwrap();
        assert_eq!(text, "1. Al Ustad Special Kabab");
        assert!(prompts.lock().unwrap()[0].contains("Budget Eats"));
    }

    // --- Chat ---

    #[tokio::test]
    async fn test_chat_appends_pair_and_persists() {
        let (svc, prompts) = service(Ok("It is in Downtown Dubai."), false);
        let mut session = ChatSession::new();

        let exchange = svc.chat(&mut session, "Where is Burj Khalifa?").await.unwrap();
        assert!(exchange.persisted());
        assert_eq!(exchange.assistant.content, "It is in Downtown Dubai.");

        assert_eq!(session.len(), 2);
        assert_eq!(session.all()[0].role, TurnRole::User);
        assert_eq!(session.all()[0].content, "Where is Burj Khalifa?");
        assert_eq!(session.all()[1].role, TurnRole::Assistant);

        let rows = svc.chat_log().rows.lock().unwrap();
        assert_eq!(
            *rows,
            vec![
                ("User".to_string(), "Where is Burj Khalifa?".to_string()),
                ("AI".to_string(), "It is in Downtown Dubai.".to_string()),
            ]
        );
        assert!(prompts.lock().unwrap()[0].contains("Where is Burj Khalifa?"));
    }

    #[tokio::test]
    async fn test_chat_sends_only_latest_message() {
        let (svc, prompts) = service(Ok("ok"), false);
        let mut session = ChatSession::new();
        svc.chat(&mut session, "first question").await.unwrap();
        svc.chat(&mut session, "second question").await.unwrap();

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert!(!prompts[1].contains("first question"));
        assert_eq!(session.len(), 4);
    }

    #[tokio::test]
    async fn test_chat_dispatch_failure_leaves_state_unchanged() {
        let (svc, _) = service(Err("connection reset"), false);
        let mut session = ChatSession::new();

        let err = svc.chat(&mut session, "Hello?").await.unwrap_err();
        assert!(matches!(err, GuideError::Dispatch(_)));
        assert!(session.is_empty());
        assert_eq!(svc.chat_log().count_messages().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_chat_storage_failure_keeps_transcript() {
        let (svc, _) = service(Ok("Try the abra ride."), true);
        let mut session = ChatSession::new();

        let exchange = svc.chat(&mut session, "Cheap things to do?").await.unwrap();
        assert!(!exchange.persisted());
        assert_eq!(
            exchange.storage_error.as_deref(),
            Some("query error: database is locked")
        );
        assert_eq!(session.len(), 2);
    }
}
