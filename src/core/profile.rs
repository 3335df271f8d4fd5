//! Fixed profile content shown on the Profile screen.

/// One label/value row of the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROFILE_HEADING: &str = "User Profile";

pub const PROFILE_DETAILS: [ProfileDetail; 5] = [
    ProfileDetail { label: "Name", value: "M Satria Gemilang" },
    ProfileDetail { label: "Student ID", value: "2111522008" },
    ProfileDetail { label: "Hobby", value: "Bridge" },
    ProfileDetail { label: "Birthplace", value: "Payakumbuh, 5 November 2000" },
    ProfileDetail { label: "Interest", value: "Web Programming" },
];
