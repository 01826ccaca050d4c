//! Synthetic leads and campaigns.
//!
//! Values are drawn from an injected random source. Callers that need
//! reproducible output seed it with [`MockDataGenerator::seeded`].

use chrono::{Days, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{
    response_rate, Campaign, CampaignStatus, ConnectionDegree, Lead, LeadStatus, Record,
};

const TITLES: [&str; 8] = [
    "Software Engineer",
    "Product Manager",
    "Marketing Director",
    "Sales Manager",
    "CEO",
    "CTO",
    "VP Sales",
    "Head of Marketing",
];

const COMPANIES: [&str; 8] = [
    "TechCorp",
    "InnovateLabs",
    "DataDriven Inc",
    "ScaleUp Co",
    "FutureWorks",
    "CloudTech",
    "AI Solutions",
    "NextGen Systems",
];

const LOCATIONS: [&str; 4] = ["San Francisco, CA", "New York, NY", "London, UK", "Berlin, DE"];

const TEMPLATES: [&str; 6] = [
    "LinkedIn Connection Request",
    "Follow-up Sequence",
    "Cold Outreach",
    "Event Follow-up",
    "Product Demo Request",
    "Partnership Inquiry",
];

/// One day of campaign activity for the detail sparklines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPerformance {
    pub date: NaiveDate,
    pub contacted: u64,
    pub replied: u64,
    pub interested: u64,
}

/// A step in a campaign's message sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStep {
    pub step: u8,
    pub kind: &'static str,
    pub delay: &'static str,
    pub message: &'static str,
    pub sent: u32,
    pub accepted: u32,
}

pub const MESSAGE_SEQUENCE: [SequenceStep; 3] = [
    SequenceStep {
        step: 1,
        kind: "Connection Request",
        delay: "0 days",
        message: "Hi [First Name], I came across your profile and was impressed by your work at [Company]. I'd love to connect.",
        sent: 245,
        accepted: 156,
    },
    SequenceStep {
        step: 2,
        kind: "Follow-up Message",
        delay: "3 days",
        message: "Thanks for connecting, [First Name]! I have some resources that might be helpful for your team.",
        sent: 156,
        accepted: 89,
    },
    SequenceStep {
        step: 3,
        kind: "Value-add Message",
        delay: "7 days",
        message: "I'd love to schedule a brief call to discuss how we can help [Company] achieve [Specific Goal].",
        sent: 89,
        accepted: 34,
    },
];

#[derive(Debug)]
pub struct MockDataGenerator<R = StdRng> {
    rng: R,
    today: NaiveDate,
}

impl MockDataGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), Local::now().date_naive())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), Local::now().date_naive())
    }
}

impl<R: Rng> MockDataGenerator<R> {
    /// `today` anchors the sampled campaign dates.
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    pub fn leads(&mut self, count: usize, start_index: usize) -> Vec<Lead> {
        (0..count)
            .map(|i| {
                let n = start_index + i + 1;
                Lead {
                    id: format!("{}-{}", Lead::KIND, start_index + i),
                    name: format!("Lead {}", n),
                    title: TITLES[i % TITLES.len()].to_string(),
                    company: COMPANIES[i % COMPANIES.len()].to_string(),
                    email: format!("lead{}@example.com", n),
                    linkedin_url: format!("https://linkedin.com/in/lead{}", n),
                    status: LeadStatus::ALL[i % LeadStatus::ALL.len()],
                    location: LOCATIONS[i % LOCATIONS.len()].to_string(),
                    connection_degree: ConnectionDegree::ALL[i % ConnectionDegree::ALL.len()],
                    last_activity: format!("{} days ago", self.rng.gen_range(1..=7)),
                }
            })
            .collect()
    }

    pub fn campaigns(&mut self, count: usize, start_index: usize) -> Vec<Campaign> {
        (0..count)
            .map(|i| {
                let leads: u32 = self.rng.gen_range(50..550);
                let contacted = scale(leads, self.rng.gen_range(0.2..1.0));
                let replied = scale(contacted, self.rng.gen_range(0.05..0.35));
                let interested = scale(replied, self.rng.gen_range(0.1..0.5));

                let start_date = self
                    .today
                    .checked_sub_days(Days::new(self.rng.gen_range(0..90)))
                    .unwrap_or(self.today);
                let end_date = if self.rng.gen_bool(0.5) {
                    self.today
                        .checked_add_days(Days::new(self.rng.gen_range(0..30)))
                } else {
                    None
                };

                let template = TEMPLATES[i % TEMPLATES.len()];
                Campaign {
                    id: format!("{}-{}", Campaign::KIND, start_index + i),
                    name: format!("Campaign {} - {}", start_index + i + 1, template),
                    status: CampaignStatus::ALL[i % CampaignStatus::ALL.len()],
                    leads,
                    contacted,
                    replied,
                    interested,
                    response_rate: response_rate(replied, contacted),
                    start_date,
                    end_date,
                    progress: self.rng.gen_range(0..100),
                    template: template.to_string(),
                }
            })
            .collect()
    }

    /// Daily activity for the `days` days ending yesterday.
    pub fn performance(&mut self, days: u64) -> Vec<DailyPerformance> {
        let first = self
            .today
            .checked_sub_days(Days::new(days))
            .unwrap_or(self.today);
        (0..days)
            .filter_map(|offset| {
                let date = first.checked_add_days(Days::new(offset))?;
                Some(DailyPerformance {
                    date,
                    contacted: self.rng.gen_range(5..25),
                    replied: self.rng.gen_range(1..9),
                    interested: self.rng.gen_range(1..5),
                })
            })
            .collect()
    }
}

/// `floor(value * ratio)` for a ratio in `[0, 1)`; never exceeds `value`.
fn scale(value: u32, ratio: f64) -> u32 {
    ((f64::from(value) * ratio).floor() as u32).min(value)
}

/// Record kinds the mock generator can produce.
pub trait Generate: Record + Sized {
    fn generate<R: Rng>(generator: &mut MockDataGenerator<R>, count: usize, start: usize)
        -> Vec<Self>;
}

impl Generate for Lead {
    fn generate<R: Rng>(generator: &mut MockDataGenerator<R>, count: usize, start: usize) -> Vec<Self> {
        generator.leads(count, start)
    }
}

impl Generate for Campaign {
    fn generate<R: Rng>(generator: &mut MockDataGenerator<R>, count: usize, start: usize) -> Vec<Self> {
        generator.campaigns(count, start)
    }
}
