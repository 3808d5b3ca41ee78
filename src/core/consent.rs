//! Consent-form "simplifier".
//!
//! There is no text analysis: after a fixed delay the input is replaced by a
//! canned plain-language summary. The flow is a three-state machine driven by
//! a single timeout.

use std::time::{Duration, Instant};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

pub const SAMPLE_CONSENT_TEXT: &str = "I, the undersigned, hereby authorize and direct Dr. Arjun Gupta and his associates or assistants to perform the following medical procedure, known as a 'cardiac catheterization', upon myself. I have been informed of the nature, consequences, risks, and benefits of this procedure, including but not limited to potential complications such as hemorrhage, infection, myocardial infarction, and adverse reactions to anesthesia. I consent to the use of my anonymized clinical data, including procedural outcomes and diagnostic imaging, for the purposes of medical research, educational advancement, and quality assurance protocols. This consent is given voluntarily and I acknowledge that I am at liberty to withdraw my consent at any time prior to the commencement of the procedure.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryPoint {
    pub title: &'static str,
    pub text: &'static str,
}

pub const SIMPLIFIED_SUMMARY: [SummaryPoint; 5] = [
    SummaryPoint {
        title: "What is the Procedure?",
        text: "You are giving permission for Dr. Arjun Gupta to perform a cardiac catheterization. This is a test where a thin tube is guided to your heart to check for any problems.",
    },
    SummaryPoint {
        title: "What are the Benefits?",
        text: "This test helps the doctor get a clear picture of your heart's health to decide the best possible treatment for you.",
    },
    SummaryPoint {
        title: "What are the Risks?",
        text: "There's a small chance of issues like bleeding, infection, or a reaction to the medicine that helps you relax. Serious problems are very rare.",
    },
    SummaryPoint {
        title: "How is Your Data Used?",
        text: "Your medical data, with your name and personal details removed, might be used for research to help improve medical science. Your privacy is protected.",
    },
    SummaryPoint {
        title: "What are Your Rights?",
        text: "You can change your mind and cancel this consent at any point before the procedure begins. Your decision will be respected.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplifierState {
    Idle,
    Pending { ready_at: Instant },
    Done,
}

#[derive(Debug, Clone)]
pub struct ConsentSimplifier {
    state: SimplifierState,
    delay: Duration,
}

impl Default for ConsentSimplifier {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl ConsentSimplifier {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: SimplifierState::Idle,
            delay,
        }
    }

    pub fn state(&self) -> SimplifierState {
        self.state
    }

    /// Starts a run. Empty input leaves the state untouched; a new submit while
    /// pending or done restarts the timeout.
    pub fn submit(&mut self, text: &str, now: Instant) -> SimplifierState {
        if text.is_empty() {
            return self.state;
        }
        self.state = SimplifierState::Pending {
            ready_at: now + self.delay,
        };
        self.state
    }

    pub fn poll(&mut self, now: Instant) -> SimplifierState {
        if let SimplifierState::Pending { ready_at } = self.state {
            if now >= ready_at {
                self.state = SimplifierState::Done;
            }
        }
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SimplifierState::Pending { .. })
    }

    pub fn summary(&self) -> Option<&'static [SummaryPoint]> {
        match self.state {
            SimplifierState::Done => Some(&SIMPLIFIED_SUMMARY),
            _ => None,
        }
    }

    /// Submits `text` and waits out the delay on the tokio timer.
    pub async fn simplify(&mut self, text: &str) -> Option<&'static [SummaryPoint]> {
        if let SimplifierState::Pending { ready_at } = self.submit(text, Instant::now()) {
            tracing::debug!("Simplifying {} characters of consent text", text.len());
            tokio::time::sleep_until(tokio::time::Instant::from_std(ready_at)).await;
            self.poll(Instant::now());
        }
        self.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_submitted() {
        let simplifier = ConsentSimplifier::default();
        assert_eq!(simplifier.state(), SimplifierState::Idle);
        assert!(simplifier.summary().is_none());
    }

    #[test]
    fn test_empty_text_is_ignored() {
        let mut simplifier = ConsentSimplifier::default();
        assert_eq!(simplifier.submit("", Instant::now()), SimplifierState::Idle);
    }

    #[test]
    fn test_pending_until_timeout() {
        let mut simplifier = ConsentSimplifier::new(Duration::from_millis(1500));
        let start = Instant::now();
        simplifier.submit(SAMPLE_CONSENT_TEXT, start);

        assert!(simplifier.is_pending());
        simplifier.poll(start + Duration::from_millis(1499));
        assert!(simplifier.is_pending());
        assert!(simplifier.summary().is_none());

        assert_eq!(simplifier.poll(start + Duration::from_millis(1500)), SimplifierState::Done);
        let summary = simplifier.summary().unwrap();
        assert_eq!(summary.len(), 5);
        assert_eq!(summary[0].title, "What is the Procedure?");
    }

    #[test]
    fn test_resubmit_clears_previous_result() {
        let mut simplifier = ConsentSimplifier::new(Duration::from_millis(10));
        let start = Instant::now();
        simplifier.submit("text", start);
        simplifier.poll(start + Duration::from_millis(10));
        assert!(simplifier.summary().is_some());

        simplifier.submit("other text", start + Duration::from_millis(20));
        assert!(simplifier.is_pending());
        assert!(simplifier.summary().is_none());
    }

    #[tokio::test]
    async fn test_simplify_waits_for_delay() {
        let mut simplifier = ConsentSimplifier::new(Duration::from_millis(5));
        let summary = simplifier.simplify(SAMPLE_CONSENT_TEXT).await;
        assert_eq!(summary.map(|s| s.len()), Some(5));
        assert_eq!(simplifier.state(), SimplifierState::Done);
    }

    #[test]
    fn test_simplify_empty_text_returns_nothing() {
        let mut simplifier = ConsentSimplifier::new(Duration::from_secs(60));
        let summary = tokio_test::block_on(simplifier.simplify(""));
        assert!(summary.is_none());
        assert_eq!(simplifier.state(), SimplifierState::Idle);
    }
}
