//! Client model
//!
//! A client record carries the full brandbook: corporate identity, digital
//! channels, brand story, personas, tone of voice, social metric history,
//! and the color palette. Brandbook edits replace whole sections at a time,
//! so each section is its own struct.

use dote_core::traits::{Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};

/// Billing plan for the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientPlan {
    /// Billed per job
    PerJob,
    /// Monthly retainer
    MonthlyFee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
    Onboarding,
}

/// Point of contact on the client side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContact {
    pub id: Id,
    pub name: String,
    pub role: String,
    pub responsibilities: String,
    pub whatsapp: String,
    pub corp_email: String,
    pub avatar: Option<String>,
    pub whatsapp_group: Option<String>,
}

/// Registered company data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateProfile {
    pub cnpj: Option<String>,
    pub razao_social: Option<String>,
    pub inscricao_municipal: Option<String>,
    pub address: Option<String>,
}

/// Where the client lives online
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalChannels {
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub tiktok: Option<String>,
    pub other_channels: Option<String>,
}

/// Narrative and positioning section of the brandbook
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStory {
    pub founding_date: Option<String>,
    pub founder_story: Option<String>,
    pub evolution: Option<String>,
    pub current_moment: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub values: Option<String>,
    pub central_message: Option<String>,
    pub brand_concept: Option<String>,
    pub language: Option<String>,
    pub practical_terms: Option<String>,
    pub what_to_avoid: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Tone-of-voice sliders, each 0-100 between the two poles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneProfile {
    pub casual_formal: u8,
    pub friendly_professional: u8,
    pub funny_serious: u8,
    pub accessible_exclusive: u8,
    pub modern_classic: u8,
    pub soft_imposing: u8,
}

impl Default for ToneProfile {
    /// New clients start centered on every axis
    fn default() -> Self {
        Self {
            casual_formal: 50,
            friendly_professional: 50,
            funny_serious: 50,
            accessible_exclusive: 50,
            modern_classic: 50,
            soft_imposing: 50,
        }
    }
}

/// Audience persona documented in the brandbook
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPersona {
    pub id: Id,
    pub name: String,
    pub photo: String,
    pub origin: String,
    pub family_status: String,
    pub routine: String,
    pub lifestyle: String,
    pub purchase_frequency: String,
    pub where_purchases: String,
    pub influences: String,
    pub motivation: String,
    pub aspirations: String,
}

/// Entry-vs-current snapshot of one social platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPlatformMetric {
    pub id: Id,
    pub platform: String,
    pub profile_name: String,
    pub profile_link: String,
    pub followers_entry: u64,
    pub followers_current: u64,
    pub reach_entry: u64,
    pub reach_current: u64,
    pub engagement_entry: f64,
    pub engagement_current: f64,
    pub clicks_entry: u64,
    pub clicks_current: u64,
    pub relevant_content: String,
    pub performance: String,
    pub last_campaigns: String,
}

/// One brand color with print references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColor {
    pub hex: String,
    pub cmyk: String,
    pub pantone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: BrandColor,
    pub secondary: BrandColor,
    pub notes: Option<String>,
}

impl Default for ColorPalette {
    /// Placeholder palette applied on client creation
    fn default() -> Self {
        Self {
            primary: BrandColor {
                hex: "#000000".to_string(),
                cmyk: "0,0,0,100".to_string(),
                pantone: "Black".to_string(),
            },
            secondary: BrandColor {
                hex: "#FFFFFF".to_string(),
                cmyk: "0,0,0,0".to_string(),
                pantone: "White".to_string(),
            },
            notes: None,
        }
    }
}

/// Agency client with its brandbook
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub logo: Option<String>,
    pub plan: ClientPlan,
    pub status: ClientStatus,
    /// Display label, not a parsed date ("Today", "Yesterday")
    pub last_interaction: String,
    #[serde(flatten)]
    pub corporate: CorporateProfile,
    #[serde(flatten)]
    pub channels: DigitalChannels,
    pub contacts: Vec<ClientContact>,
    #[serde(flatten)]
    pub story: BrandStory,
    pub personas: Vec<ClientPersona>,
    pub tone: ToneProfile,
    pub social_history: Vec<SocialPlatformMetric>,
    pub colors: ColorPalette,
}

impl Client {
    /// New client with the defaults applied on the onboarding form
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            logo: None,
            plan: ClientPlan::MonthlyFee,
            status: ClientStatus::Active,
            last_interaction: "Today".to_string(),
            corporate: CorporateProfile::default(),
            channels: DigitalChannels::default(),
            contacts: Vec::new(),
            story: BrandStory::default(),
            personas: Vec::new(),
            tone: ToneProfile::default(),
            social_history: Vec::new(),
            colors: ColorPalette::default(),
        }
    }
}

impl Identifiable for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Client {
    const TYPE_NAME: &'static str = "Client";
}
