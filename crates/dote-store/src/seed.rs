//! Demo fixtures
//!
//! The seed data the dashboard ships with: three team members, two clients
//! (one with a fully filled brandbook), the agency calendar, and two jobs in
//! flight.

use chrono::NaiveDate;
use dote_core::error::DoteResult;
use dote_models::{
    AccessPermissions, BrandColor, BrandStory, Client, ClientContact, ClientPersona, ClientPlan,
    ColorPalette, CommemorativeDate, CorporateProfile, DigitalChannels, Job, JobHistoryEntry,
    JobPiece, JobStage, JobType, MemberStatus, PieceStatus, Role, SocialPlatformMetric,
    TeamMember, ToneProfile,
};

use crate::Stores;

/// Load the demo fixtures into the given stores
pub async fn populate(stores: &Stores) -> DoteResult<()> {
    for member in team() {
        stores.team.put(member).await?;
    }
    for client in clients() {
        stores.clients.put(client).await?;
    }
    for date in dates() {
        stores.dates.put(date).await?;
    }
    // Jobs go through put in fixture order; JOB-101 stays first
    for job in jobs() {
        stores.jobs.put(job).await?;
    }
    tracing::debug!("seeded demo fixtures");
    Ok(())
}

fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            phone: Some("(11) 91234-5678".to_string()),
            joined_date: NaiveDate::from_ymd_opt(2022, 1, 10),
            avatar: Some("https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=150&h=150&fit=crop".to_string()),
            bio: Some("Agile management specialist focused on creative agencies. Passionate about process optimization and people leadership.".to_string()),
            skills: vec![
                "Project management".to_string(),
                "Scrum".to_string(),
                "Account handling".to_string(),
                "Strategy".to_string(),
            ],
            permissions: Some(AccessPermissions::for_role(Role::Atendimento)),
            ..TeamMember::new("1", "Jéssica Bastianini", "ana@dote.com", Role::Atendimento)
        },
        TeamMember {
            phone: Some("(11) 99127-0303".to_string()),
            joined_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            avatar: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=150&h=150&fit=crop".to_string()),
            bio: Some("Multidisciplinary designer focused on visual identities and modern interfaces. Fond of minimalism and strong typography.".to_string()),
            skills: vec![
                "Photoshop".to_string(),
                "Illustrator".to_string(),
                "Figma".to_string(),
                "UI/UX design".to_string(),
            ],
            permissions: Some(AccessPermissions::for_role(Role::Designer)),
            ..TeamMember::new("2", "Roberto Dias", "roberto@dote.com", Role::Designer)
        },
        TeamMember {
            phone: Some("(11) 95555-4444".to_string()),
            joined_date: NaiveDate::from_ymd_opt(2023, 6, 20),
            avatar: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=150&h=150&fit=crop".to_string()),
            bio: Some("Copywriter and content strategist. Builds narratives that connect brands to people in an authentic way.".to_string()),
            skills: vec![
                "Copywriting".to_string(),
                "SEO".to_string(),
                "Content planning".to_string(),
                "Social media".to_string(),
            ],
            permissions: Some(AccessPermissions::for_role(Role::Creator)),
            ..TeamMember::new("3", "Julia Lima", "julia@dote.com", Role::Creator)
        },
    ]
}

fn clients() -> Vec<Client> {
    let techsolutions = Client {
        email: "contact@tech.com".to_string(),
        phone: "(11) 99999-9999".to_string(),
        logo: Some("https://images.unsplash.com/photo-1560179707-f14e90ef3623?q=80&w=220&h=120&fit=crop".to_string()),
        plan: ClientPlan::MonthlyFee,
        corporate: CorporateProfile {
            cnpj: Some("12.345.678/0001-99".to_string()),
            razao_social: Some("Tech Solutions Inovações LTDA".to_string()),
            inscricao_municipal: Some("987654-32".to_string()),
            address: Some("Av. Paulista, 1000 - Bela Vista, São Paulo/SP".to_string()),
        },
        channels: DigitalChannels {
            website: Some("www.techsolutions.com.br".to_string()),
            instagram: Some("@techsolutions_br".to_string()),
            linkedin: Some("linkedin.com/company/techsolutions".to_string()),
            ..DigitalChannels::default()
        },
        contacts: vec![ClientContact {
            id: "c1".to_string(),
            name: "Carlos Mendes".to_string(),
            role: "Marketing director".to_string(),
            responsibilities: "Budget approval and global strategy.".to_string(),
            whatsapp: "(11) 98888-7777".to_string(),
            corp_email: "carlos@tech.com".to_string(),
            avatar: None,
            whatsapp_group: Some("https://wa.me/group/tech".to_string()),
        }],
        story: BrandStory {
            founding_date: Some("2015-05-12".to_string()),
            founder_story: Some("Born in a garage in Brazil's Silicon Valley, founded by two engineers frustrated with the slowness of traditional IT support.".to_string()),
            evolution: Some("Started as local support, moved to cloud infrastructure in 2018 and now leads the applied-AI segment.".to_string()),
            current_moment: Some("Market consolidation and expansion across Latin America.".to_string()),
            mission: Some("Simplify technology for companies of every size.".to_string()),
            vision: Some("Be the technological backbone of the biggest global innovations.".to_string()),
            values: Some("Transparency, speed, empathy and incremental innovation.".to_string()),
            central_message: Some("Technology that understands people.".to_string()),
            brand_concept: Some("Invisible efficiency: everything works so well you never notice it is there.".to_string()),
            language: Some("Direct, technical yet didactic, no legalese.".to_string()),
            practical_terms: Some("Solution, Flow, Integration, Future.".to_string()),
            what_to_avoid: Some("Alarmist wording or miracle promises.".to_string()),
            keywords: vec![
                "AI".to_string(),
                "Cloud".to_string(),
                "Support".to_string(),
                "Performance".to_string(),
                "Innovation".to_string(),
            ],
        },
        personas: vec![ClientPersona {
            id: "p1".to_string(),
            name: "Rodrigo Inovador".to_string(),
            photo: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=220&h=220&fit=crop".to_string(),
            origin: "From Curitiba, lives in São Paulo".to_string(),
            family_status: "Single, lives with a pet".to_string(),
            routine: "Works 10 hours a day, does CrossFit and follows business podcasts.".to_string(),
            lifestyle: "Early adopter, values design and functionality.".to_string(),
            purchase_frequency: "Monthly (B2B subscriptions)".to_string(),
            where_purchases: "Online, LinkedIn Ads, referrals".to_string(),
            influences: "Tech YouTube, specialized newsletters".to_string(),
            motivation: "Grow the company and automate as much as possible.".to_string(),
            aspirations: "Become an industry reference and have free time to travel.".to_string(),
        }],
        tone: ToneProfile {
            casual_formal: 65,
            friendly_professional: 80,
            funny_serious: 30,
            accessible_exclusive: 50,
            modern_classic: 90,
            soft_imposing: 40,
        },
        social_history: vec![SocialPlatformMetric {
            id: "s1".to_string(),
            platform: "Instagram".to_string(),
            profile_name: "@techsolutions_br".to_string(),
            profile_link: "instagram.com/techsolutions".to_string(),
            followers_entry: 1500,
            followers_current: 4500,
            reach_entry: 5000,
            reach_current: 12000,
            engagement_entry: 2.5,
            engagement_current: 4.8,
            clicks_entry: 120,
            clicks_current: 850,
            relevant_content: "Reels with IT productivity tips.".to_string(),
            performance: "Strong on educational content.".to_string(),
            last_campaigns: "AI module launch (Oct/23)".to_string(),
        }],
        colors: ColorPalette {
            primary: BrandColor {
                hex: "#0055FF".to_string(),
                cmyk: "100, 60, 0, 0".to_string(),
                pantone: "Process Blue".to_string(),
            },
            secondary: BrandColor {
                hex: "#111827".to_string(),
                cmyk: "0, 0, 0, 95".to_string(),
                pantone: "Black 6 C".to_string(),
            },
            notes: Some("Use soft gradients between the primary and white.".to_string()),
        },
        ..Client::new("1", "TechSolutions Inc.")
    };

    let boutique_flora = Client {
        email: "flora@boutique.com".to_string(),
        phone: "(11) 98888-8888".to_string(),
        plan: ClientPlan::PerJob,
        last_interaction: "Yesterday".to_string(),
        colors: ColorPalette {
            primary: BrandColor {
                hex: "#E11D48".to_string(),
                cmyk: "0, 90, 60, 0".to_string(),
                pantone: "199 C".to_string(),
            },
            secondary: BrandColor {
                hex: "#FFF1F2".to_string(),
                cmyk: "0, 2, 1, 0".to_string(),
                pantone: "705 C".to_string(),
            },
            notes: None,
        },
        ..Client::new("2", "Boutique Flora")
    };

    vec![techsolutions, boutique_flora]
}

fn dates() -> Vec<CommemorativeDate> {
    let date = |id: &str, name: &str, day: u32, month: u32, client_id: Option<&str>| {
        CommemorativeDate {
            id: id.to_string(),
            name: name.to_string(),
            day,
            month,
            client_id: client_id.map(str::to_string),
        }
    };
    vec![
        date("d1", "Christmas", 25, 11, None),
        date("d2", "New Year", 1, 0, None),
        date("d3", "Client Day", 15, 8, None),
        date("d4", "TechSolutions anniversary", 20, 4, Some("1")),
    ]
}

fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "JOB-101".to_string(),
            title: "Black Friday campaign".to_string(),
            client_id: "1".to_string(),
            client_name: "TechSolutions Inc.".to_string(),
            job_type: JobType::Digital,
            stage: JobStage::Creation,
            assignee_id: "2".to_string(),
            deadline: NaiveDate::from_ymd_opt(2023, 11, 20).expect("valid fixture date"),
            description: Some("Campaign focused on AI and automation for retail.".to_string()),
            dropbox_links: vec![
                "https://www.dropbox.com/s/sample1".to_string(),
                "https://www.dropbox.com/s/sample2".to_string(),
            ],
            pieces: vec![JobPiece {
                id: "p1".to_string(),
                name: "Site banner".to_string(),
                piece_type: JobType::Digital,
                format: "1920x600".to_string(),
                assignee_ids: vec!["2".to_string()],
                content: "Headline: AI that sells for you. CTA: Learn more.".to_string(),
                final_art_link: None,
                status: PieceStatus::Pending,
            }],
            history: vec![JobHistoryEntry {
                id: "h1".to_string(),
                date: "2023-10-15 10:00".to_string(),
                user: "Jéssica Bastianini".to_string(),
                action: "Job created".to_string(),
            }],
        },
        Job {
            id: "JOB-102".to_string(),
            title: "New floral logo".to_string(),
            client_id: "2".to_string(),
            client_name: "Boutique Flora".to_string(),
            job_type: JobType::Offline,
            stage: JobStage::Briefing,
            assignee_id: "1".to_string(),
            deadline: NaiveDate::from_ymd_opt(2023, 12, 15).expect("valid fixture date"),
            description: None,
            dropbox_links: Vec::new(),
            pieces: Vec::new(),
            history: Vec::new(),
        },
    ]
}
