// src/dashboard.rs
use serde::Serialize;

use crate::types::CvSummary;

pub const CONNECT_ACCOUNT_MESSAGE: &str = "Connect your InfoJobs account to import your resumes.";
pub const CREATE_RESUME_ROUTE: &str = "/resumes/create";
pub const CREATE_RESUME_LABEL: &str = "Create a new resume";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardCard {
    ConnectAccount { message: String, login_url: String },
    Cv(CvSummary),
    CreateResume { href: String, label: String },
}

/// Cards in display order: connect prompt (unlinked only), one per CV, create action.
pub fn build_dashboard(is_linked: bool, dialog_url: &str, cvs: &[CvSummary]) -> Vec<DashboardCard> {
    let mut cards = Vec::with_capacity(cvs.len() + 2);

    if !is_linked {
        cards.push(DashboardCard::ConnectAccount {
            message: CONNECT_ACCOUNT_MESSAGE.to_string(),
            login_url: dialog_url.to_string(),
        });
    }

    cards.extend(cvs.iter().cloned().map(DashboardCard::Cv));

    cards.push(DashboardCard::CreateResume {
        href: CREATE_RESUME_ROUTE.to_string(),
        label: CREATE_RESUME_LABEL.to_string(),
    });

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cv(id: i64, name: &str) -> CvSummary {
        CvSummary {
            id,
            code: format!("code-{}", id),
            name: name.to_string(),
            completed: false,
            principal: id == 1,
            incomplete_steps: vec!["experience".to_string()],
        }
    }

    #[test]
    fn test_unlinked_shows_connect_prompt_first() {
        let cvs = vec![cv(1, "Main"), cv(2, "Short")];
        let cards = build_dashboard(false, "https://example.test/oauth", &cvs);

        assert_eq!(cards.len(), 4);
        assert_eq!(
            cards[0],
            DashboardCard::ConnectAccount {
                message: CONNECT_ACCOUNT_MESSAGE.to_string(),
                login_url: "https://example.test/oauth".to_string(),
            }
        );
        assert_eq!(cards[1], DashboardCard::Cv(cvs[0].clone()));
        assert_eq!(cards[2], DashboardCard::Cv(cvs[1].clone()));
    }

    #[test]
    fn test_linked_without_cvs_only_create_card() {
        let cards = build_dashboard(true, "ignored", &[]);
        assert_eq!(
            cards,
            vec![DashboardCard::CreateResume {
                href: CREATE_RESUME_ROUTE.to_string(),
                label: CREATE_RESUME_LABEL.to_string(),
            }]
        );
    }

    #[test]
    fn test_card_serialization_tag() {
        let cards = build_dashboard(true, "", &[cv(7, "Other")]);
        let json = serde_json::to_value(&cards).unwrap();

        assert_eq!(json[0]["kind"], "cv");
        assert_eq!(json[0]["incompleteSteps"][0], "experience");
        assert_eq!(json[1]["kind"], "create_resume");
        assert_eq!(json[1]["href"], "/resumes/create");
    }
}
