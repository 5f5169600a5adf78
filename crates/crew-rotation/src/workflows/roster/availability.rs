use super::domain::{Availability, TechnicianStatus};

pub fn classify(status: &TechnicianStatus) -> Availability {
    match status {
        TechnicianStatus::Active => Availability::Available,
        TechnicianStatus::OnVacation
        | TechnicianStatus::OnLeave
        | TechnicianStatus::Unrecognized(_) => Availability::Unavailable,
    }
}

pub fn classify_label(label: &str) -> Availability {
    classify(&TechnicianStatus::from_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_technicians_are_available() {
        assert_eq!(classify(&TechnicianStatus::Active), Availability::Available);
        assert_eq!(
            classify(&TechnicianStatus::OnVacation),
            Availability::Unavailable
        );
        assert_eq!(classify(&TechnicianStatus::OnLeave), Availability::Unavailable);
    }

    #[test]
    fn unrecognized_labels_degrade_to_unavailable() {
        for label in ["Retired", "", "ACTIVE", " Active", "Active ", "Inactive", "act ive"] {
            assert_eq!(classify_label(label), Availability::Unavailable, "{label:?}");
        }
    }

    #[test]
    fn wire_and_canonical_labels_are_recognized() {
        assert_eq!(classify_label("Active"), Availability::Available);
        assert_eq!(classify_label("active"), Availability::Available);
        assert_eq!(
            TechnicianStatus::from_label("on_vacation"),
            TechnicianStatus::OnVacation
        );
        assert_eq!(
            TechnicianStatus::from_label("OnLeave"),
            TechnicianStatus::OnLeave
        );
        assert_eq!(
            TechnicianStatus::from_label("Sabbatical"),
            TechnicianStatus::Unrecognized("Sabbatical".to_string())
        );
    }
}
