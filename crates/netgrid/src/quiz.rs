use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog;
use crate::device::DeviceId;
use crate::network::Network;

/// Score awarded for each correct answer.
pub const POINTS_PER_ANSWER: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub answer: usize,
}

impl Question {
    pub fn new(prompt: &str, options: &[&str], answer: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub correct: usize,
    /// Device spawned for a perfect submission.
    pub reward: Option<DeviceId>,
}

impl Default for Quiz {
    fn default() -> Self {
        Self {
            questions: vec![
                Question::new(
                    "What does a firewall do?",
                    &[
                        "Stores data",
                        "Filters network traffic",
                        "Serves web pages",
                    ],
                    1,
                ),
                Question::new(
                    "Which device stores persistent records?",
                    &["Database", "Router", "WWW Endpoint"],
                    0,
                ),
                Question::new(
                    "Which device forwards packets between networks?",
                    &["Server", "Firewall", "Router"],
                    2,
                ),
            ],
        }
    }
}

impl Quiz {
    /// Score `answers` against the questions, position by position.
    ///
    /// Missing answers count as wrong. When every question is answered correctly a
    /// "New Endpoint" is placed on a random free grid point.
    pub fn submit<R: Rng + ?Sized>(
        &self,
        answers: &[usize],
        network: &mut Network,
        rng: &mut R,
    ) -> QuizResult {
        let correct = self
            .questions
            .iter()
            .zip(answers)
            .filter(|(q, a)| q.answer == **a)
            .count();
        let score = correct as u32 * POINTS_PER_ANSWER;

        let reward = if !self.questions.is_empty() && correct == self.questions.len() {
            match network.place_random(&catalog::reward_endpoint(), rng) {
                Ok(device) => Some(device.id.clone()),
                Err(e) => {
                    warn!(error = %e, "could not place quiz reward");
                    None
                }
            }
        } else {
            None
        };

        info!(score, correct, total = self.questions.len(), "quiz submitted");
        QuizResult {
            score,
            correct,
            reward,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::grid::GridPoint;

    #[test]
    fn perfect_score_spawns_endpoint() {
        let mut net = Network::new();
        let db = catalog::find("Database").unwrap();
        net.place(&db, GridPoint::new(5, 5).unwrap()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let result = Quiz::default().submit(&[1, 0, 2], &mut net, &mut rng);

        assert_eq!(result.score, 30);
        assert_eq!(result.correct, 3);
        assert_eq!(net.len(), 2);
        let spawned = net.devices().last().unwrap();
        assert_eq!(Some(&spawned.id), result.reward.as_ref());
        assert_eq!(spawned.name, "New Endpoint");
        assert!(spawned.connected_to.is_empty());
        assert_ne!(spawned.position, GridPoint::new(5, 5).unwrap());
    }

    #[test]
    fn partial_score_spawns_nothing() {
        let mut net = Network::new();
        let mut rng = StdRng::seed_from_u64(7);

        let result = Quiz::default().submit(&[1, 1, 2], &mut net, &mut rng);

        assert_eq!(result.score, 20);
        assert_eq!(result.reward, None);
        assert!(net.is_empty());
    }

    #[test]
    fn missing_answers_count_as_wrong() {
        let mut net = Network::new();
        let mut rng = StdRng::seed_from_u64(7);

        let result = Quiz::default().submit(&[1], &mut net, &mut rng);

        assert_eq!(result.score, 10);
        assert_eq!(result.reward, None);
    }

    #[test]
    fn empty_quiz_gives_no_reward() {
        let mut net = Network::new();
        let mut rng = StdRng::seed_from_u64(7);
        let quiz = Quiz { questions: vec![] };

        let result = quiz.submit(&[], &mut net, &mut rng);

        assert_eq!(result.score, 0);
        assert!(net.is_empty());
    }
}
