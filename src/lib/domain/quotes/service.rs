//! Quote submission controller

use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    comms::{
        errors::MailerError,
        mailer::{message::Message, Mailer},
        value_objects::email_address::EmailAddress,
    },
    quotes::{
        emails::quote_request::QuoteRequestEmail,
        form::{QuoteForm, SubmissionState},
        models::quote_request::{QuoteField, QuoteRequest},
    },
};

/// The result of one submission attempt
///
/// A single type for both the gateway reporting failure and any fault raised
/// while composing or dispatching the message; the caller never sees more than
/// one of these per attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The notification was dispatched and the form was cleared
    Sent,

    /// The dispatch failed; the draft is preserved for resubmission
    Failed {
        /// Human-readable instruction naming the direct contact address
        fallback: String,
    },

    /// A submission was already in flight; the call had no effect
    AlreadyInFlight,
}

/// Quote intake service
///
/// The surface exposed to the rendering layer: field mutation intents, the
/// submission trigger and the state query used to disable the submit control.
#[async_trait]
pub trait QuoteIntake: Clone + Send + Sync + 'static {
    /// Replace one field of the current draft
    async fn set_field(&self, field: QuoteField, value: &str);

    /// A snapshot of the current draft
    async fn draft(&self) -> QuoteRequest;

    /// The current submission state
    async fn submission_state(&self) -> SubmissionState;

    /// Run one submission attempt
    ///
    /// # Returns
    /// The [`SubmissionOutcome`] of the attempt. Faults never escape; every
    /// completed attempt leaves the form back in the `Idle` state.
    async fn submit(&self) -> SubmissionOutcome;
}

#[cfg(test)]
mock! {
    pub QuoteIntake {}

    impl Clone for QuoteIntake {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl QuoteIntake for QuoteIntake {
        async fn set_field(&self, field: QuoteField, value: &str);
        async fn draft(&self) -> QuoteRequest;
        async fn submission_state(&self) -> SubmissionState;
        async fn submit(&self) -> SubmissionOutcome;
    }
}

/// Quote intake service implementation
#[derive(Clone, Debug)]
pub struct QuoteIntakeImpl<M>
where
    M: Mailer,
{
    form: Arc<Mutex<QuoteForm>>,
    mailer: Arc<M>,
    recipient: EmailAddress,
}

impl<M> QuoteIntakeImpl<M>
where
    M: Mailer,
{
    /// Creates a new quote intake service
    ///
    /// # Arguments
    /// * `mailer` - The notification gateway used for dispatch.
    /// * `recipient` - The fixed inbox receiving quote requests; also named in
    ///   the fallback instruction shown on failure.
    pub fn new(mailer: Arc<M>, recipient: EmailAddress) -> Self {
        Self {
            form: Arc::new(Mutex::new(QuoteForm::new())),
            mailer,
            recipient,
        }
    }

    async fn dispatch(&self, draft: &QuoteRequest) -> Result<(), MailerError> {
        let email = QuoteRequestEmail::new(draft);

        let message = Message {
            to: self.recipient.clone(),
            reply_to: draft.email.clone(),
            subject: email.subject(),
            html_body: email.render()?,
            plain_body: email.render_plain(),
        };

        self.mailer.send(&message).await
    }

    fn fallback_instruction(&self) -> String {
        format!(
            "Une erreur est survenue lors de l'envoi de votre demande. \
             Veuillez réessayer ou me contacter directement à {}",
            self.recipient
        )
    }
}

#[async_trait]
impl<M> QuoteIntake for QuoteIntakeImpl<M>
where
    M: Mailer,
{
    async fn set_field(&self, field: QuoteField, value: &str) {
        self.form.lock().await.set_field(field, value);
    }

    async fn draft(&self) -> QuoteRequest {
        self.form.lock().await.draft().clone()
    }

    async fn submission_state(&self) -> SubmissionState {
        self.form.lock().await.state()
    }

    async fn submit(&self) -> SubmissionOutcome {
        // Snapshot the draft and flip to Submitting in one locked section; the
        // lock is never held across the dispatch await.
        let draft = match self.form.lock().await.begin_submission() {
            Some(draft) => draft,
            None => return SubmissionOutcome::AlreadyInFlight,
        };

        let dispatched = self.dispatch(&draft).await;

        // Unconditional finalization: success and failure both end in Idle.
        self.form
            .lock()
            .await
            .finish_submission(dispatched.is_ok());

        match dispatched {
            Ok(()) => SubmissionOutcome::Sent,
            Err(err) => {
                warn!("failed to dispatch quote request: {err}");

                SubmissionOutcome::Failed {
                    fallback: self.fallback_instruction(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use testresult::TestResult;
    use tokio::sync::Notify;

    use crate::domain::comms::mailer::MockMailer;

    use super::*;

    const RECIPIENT: &str = "pierre@example.com";

    async fn fill(intake: &impl QuoteIntake) {
        intake.set_field(QuoteField::Name, "Alice").await;
        intake.set_field(QuoteField::Email, "a@b.com").await;
        intake.set_field(QuoteField::Phone, "").await;
        intake.set_field(QuoteField::Establishment, "Le Bistro").await;
        intake
            .set_field(QuoteField::Message, "Need a wine list\nfor 20 covers")
            .await;
    }

    #[tokio::test]
    async fn test_submit_success_clears_the_form() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|message: &Message| {
                message.to.as_str() == RECIPIENT
                    && message.reply_to == "a@b.com"
                    && message.subject == "Nouvelle demande de devis - Le Bistro"
                    && message.plain_body.contains("Nom : Alice")
                    && message.html_body.contains("Le Bistro")
            })
            .returning(|_| Ok(()));

        let intake = QuoteIntakeImpl::new(Arc::new(mailer), EmailAddress::new(RECIPIENT)?);
        fill(&intake).await;

        assert_eq!(intake.submit().await, SubmissionOutcome::Sent);
        assert_eq!(intake.submission_state().await, SubmissionState::Idle);
        assert_eq!(intake.draft().await, QuoteRequest::default());

        Ok(())
    }

    #[tokio::test]
    async fn test_submit_failure_preserves_the_draft() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailerError::SendError));

        let intake = QuoteIntakeImpl::new(Arc::new(mailer), EmailAddress::new(RECIPIENT)?);
        fill(&intake).await;

        let before = intake.draft().await;

        match intake.submit().await {
            SubmissionOutcome::Failed { fallback } => {
                assert!(fallback.contains(RECIPIENT));
            }
            outcome => panic!("expected a failed outcome, got {outcome:?}"),
        }

        assert_eq!(intake.submission_state().await, SubmissionState::Idle);
        assert_eq!(intake.draft().await, before);

        Ok(())
    }

    #[tokio::test]
    async fn test_resubmission_works_after_a_failure() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailerError::SendError));
        mailer.expect_send().times(1).returning(|_| Ok(()));

        let intake = QuoteIntakeImpl::new(Arc::new(mailer), EmailAddress::new(RECIPIENT)?);
        fill(&intake).await;

        assert!(matches!(
            intake.submit().await,
            SubmissionOutcome::Failed { .. }
        ));
        assert_eq!(intake.submit().await, SubmissionOutcome::Sent);

        Ok(())
    }

    /// A gateway stub that holds the dispatch open until released
    #[derive(Clone)]
    struct BlockingMailer {
        release: Arc<Notify>,
        sends: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Mailer for BlockingMailer {
        async fn send(&self, _message: &Message) -> Result<(), MailerError> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;

            Ok(())
        }
    }

    #[tokio::test]
    async fn test_second_submit_is_rejected_while_first_is_in_flight() -> TestResult {
        let release = Arc::new(Notify::new());
        let sends = Arc::new(AtomicUsize::new(0));

        let mailer = BlockingMailer {
            release: release.clone(),
            sends: sends.clone(),
        };

        let intake = QuoteIntakeImpl::new(Arc::new(mailer), EmailAddress::new(RECIPIENT)?);
        fill(&intake).await;

        let first = tokio::spawn({
            let intake = intake.clone();
            async move { intake.submit().await }
        });

        while intake.submission_state().await != SubmissionState::Submitting {
            tokio::task::yield_now().await;
        }

        assert_eq!(intake.submit().await, SubmissionOutcome::AlreadyInFlight);
        assert_eq!(intake.submission_state().await, SubmissionState::Submitting);

        release.notify_one();

        assert_eq!(first.await?, SubmissionOutcome::Sent);
        assert_eq!(sends.load(Ordering::SeqCst), 1);

        Ok(())
    }
}
