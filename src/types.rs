use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LinkbirdError, Result};

/// Anything the list controller can hold.
pub trait Record: Clone + Send + 'static {
    /// Prefix used for generated identifiers, e.g. `lead-0`.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Reject data that must never be rendered.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Replied,
    Interested,
    NotInterested,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Replied,
        LeadStatus::Interested,
        LeadStatus::NotInterested,
    ];
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadStatus::New => write!(f, "new"),
            LeadStatus::Contacted => write!(f, "contacted"),
            LeadStatus::Replied => write!(f, "replied"),
            LeadStatus::Interested => write!(f, "interested"),
            LeadStatus::NotInterested => write!(f, "not interested"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionDegree {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
}

impl ConnectionDegree {
    pub const ALL: [ConnectionDegree; 3] = [
        ConnectionDegree::First,
        ConnectionDegree::Second,
        ConnectionDegree::Third,
    ];
}

impl fmt::Display for ConnectionDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionDegree::First => write!(f, "1st"),
            ConnectionDegree::Second => write!(f, "2nd"),
            ConnectionDegree::Third => write!(f, "3rd"),
        }
    }
}

/// A LinkedIn prospect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub linkedin_url: String,
    pub status: LeadStatus,
    pub location: String,
    pub connection_degree: ConnectionDegree,
    pub last_activity: String,
}

impl Record for Lead {
    const KIND: &'static str = "lead";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    Draft,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 4] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
        CampaignStatus::Draft,
    ];
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampaignStatus::Active => write!(f, "Active"),
            CampaignStatus::Paused => write!(f, "Paused"),
            CampaignStatus::Completed => write!(f, "Completed"),
            CampaignStatus::Draft => write!(f, "Draft"),
        }
    }
}

/// Outreach campaign with its funnel counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub leads: u32,
    pub contacted: u32,
    pub replied: u32,
    pub interested: u32,
    pub response_rate: u32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub progress: u8,
    pub template: String,
}

/// Percentage of contacted leads that replied, rounded half away from zero.
pub fn response_rate(replied: u32, contacted: u32) -> u32 {
    if contacted == 0 {
        return 0;
    }
    (f64::from(replied) / f64::from(contacted) * 100.0).round() as u32
}

impl Record for Campaign {
    const KIND: &'static str = "campaign";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        let reason = if self.contacted > self.leads {
            Some("contacted exceeds leads")
        } else if self.replied > self.contacted {
            Some("replied exceeds contacted")
        } else if self.interested > self.replied {
            Some("interested exceeds replied")
        } else if self.response_rate != response_rate(self.replied, self.contacted) {
            Some("response rate does not match funnel")
        } else if self.progress > 100 {
            Some("progress above 100%")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(LinkbirdError::Invariant {
                id: self.id.clone(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// One page returned by a record source
#[derive(Debug, Clone)]
pub struct Batch<T> {
    pub items: Vec<T>,
    /// The source has nothing after this page.
    pub end_of_data: bool,
}

/// The signed-in user, persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(leads: u32, contacted: u32, replied: u32, interested: u32) -> Campaign {
        Campaign {
            id: "campaign-0".to_string(),
            name: "Campaign 1 - Cold Outreach".to_string(),
            status: CampaignStatus::Active,
            leads,
            contacted,
            replied,
            interested,
            response_rate: response_rate(replied, contacted),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            progress: 50,
            template: "Cold Outreach".to_string(),
        }
    }

    #[test]
    fn response_rate_rounds() {
        assert_eq!(response_rate(1, 3), 33);
        assert_eq!(response_rate(2, 3), 67);
        assert_eq!(response_rate(1, 8), 13);
    }

    #[test]
    fn response_rate_zero_contacted() {
        assert_eq!(response_rate(0, 0), 0);
    }

    #[test]
    fn valid_funnel_passes() {
        assert!(campaign(100, 80, 10, 2).validate().is_ok());
        assert!(campaign(0, 0, 0, 0).validate().is_ok());
    }

    #[test]
    fn inverted_funnel_is_rejected() {
        assert!(campaign(10, 20, 5, 1).validate().is_err());
        assert!(campaign(100, 20, 25, 1).validate().is_err());
        assert!(campaign(100, 20, 5, 6).validate().is_err());
    }

    #[test]
    fn mismatched_response_rate_is_rejected() {
        let mut c = campaign(100, 50, 10, 2);
        c.response_rate = 99;
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("campaign-0"));
    }

    #[test]
    fn lead_status_serializes_snake_case() {
        let json = serde_json::to_string(&LeadStatus::NotInterested).unwrap();
        assert_eq!(json, "\"not_interested\"");
        assert_eq!(LeadStatus::NotInterested.to_string(), "not interested");
    }

    #[test]
    fn degree_serializes_ordinal() {
        let json = serde_json::to_string(&ConnectionDegree::Second).unwrap();
        assert_eq!(json, "\"2nd\"");
    }

    #[test]
    fn identity_round_trips_through_json() {
        let identity = Identity {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            avatar: "https://randomuser.me/api/portraits/men/2.jpg".to_string(),
        };
        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
    }
}
