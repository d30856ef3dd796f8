//! Per-destination access requirements and the navigable destination set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use trackhub_core::AppError;

/// Static access policy attached to a navigable destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRequirement {
    /// Anyone may navigate here, signed in or not.
    Public,
    /// Any signed-in session may navigate here.
    Authenticated,
    /// Only sessions carrying an administrator role.
    Admin,
    /// Only sessions whose role matches one of the listed entries
    /// (see [`role_matches`](crate::policy::role_matches)).
    RoleIn(Vec<String>),
}

/// A navigable destination in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Public landing page.
    Home,
    /// Sign-in form.
    Login,
    /// Sign-up form.
    Register,
    /// Project list — the default post-login destination.
    Projects,
    /// Single project with its milestones and documents.
    ProjectDetails,
    /// Milestone overview.
    Milestones,
    /// Document overview.
    Documents,
    /// Generic post-login dashboard; dispatches by role on arrival.
    Dashboard,
    /// Administrator panel.
    AdminPanel,
    /// Principal-investigator landing view.
    PiDashboard,
    /// Team-member landing view.
    MemberDashboard,
}

impl Destination {
    /// URL-style path of the destination, as the original route map spells it.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Projects => "/projects",
            Self::ProjectDetails => "/projects/:id",
            Self::Milestones => "/milestones",
            Self::Documents => "/documents",
            Self::Dashboard => "/dashboard",
            Self::AdminPanel => "/admin",
            Self::PiDashboard => "/dashboard/pi",
            Self::MemberDashboard => "/dashboard/member",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Destination {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('/') {
            "" | "home" => Ok(Self::Home),
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            "projects" => Ok(Self::Projects),
            "milestones" => Ok(Self::Milestones),
            "documents" => Ok(Self::Documents),
            "dashboard" => Ok(Self::Dashboard),
            "admin" => Ok(Self::AdminPanel),
            "dashboard/pi" => Ok(Self::PiDashboard),
            "dashboard/member" => Ok(Self::MemberDashboard),
            other => Err(AppError::not_found(format!("Unknown destination '{other}'"))),
        }
    }
}
