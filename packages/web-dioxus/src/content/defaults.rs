//! Bundled fallback content.
//!
//! Rendered whenever the live fetch fails or a table is still empty, so the
//! site never shows a blank page during a backend outage. Every dataset here
//! is non-empty.

use crate::types::{Category, JobPosition, Service, TeamMember};

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "corporate-commercial".to_string(),
            title: "Corporate & Commercial Law".to_string(),
            summary: "Company formation, governance, and commercial contracts.".to_string(),
            description: "We advise companies at every stage, from incorporation and \
                shareholder arrangements through mergers, acquisitions and regulatory \
                compliance under the Companies Act, 2015."
                .to_string(),
            header_image: Some("/images/services/corporate.jpg".to_string()),
            display_order: Some(1),
        },
        Service {
            id: "dispute-resolution".to_string(),
            title: "Dispute Resolution & Litigation".to_string(),
            summary: "Representation before courts and tribunals across Kenya.".to_string(),
            description: "Our advocates appear in the Magistrates' Courts, the High Court \
                and the Court of Appeal, and pursue arbitration and mediation where a \
                negotiated outcome serves the client better."
                .to_string(),
            header_image: Some("/images/services/litigation.jpg".to_string()),
            display_order: Some(2),
        },
        Service {
            id: "real-estate".to_string(),
            title: "Real Estate & Conveyancing".to_string(),
            summary: "Property transactions, leases, and land registration.".to_string(),
            description: "From due diligence and transfers to sectional titles and \
                charges, we see property transactions through the Lands Registry end to \
                end."
                .to_string(),
            header_image: Some("/images/services/conveyancing.jpg".to_string()),
            display_order: Some(3),
        },
        Service {
            id: "family-succession".to_string(),
            title: "Family Law & Succession".to_string(),
            summary: "Matrimonial matters, estate planning, and probate.".to_string(),
            description: "We handle divorce, custody and maintenance matters with \
                discretion, and guide families through wills, trusts and the probate \
                process under the Law of Succession Act."
                .to_string(),
            header_image: Some("/images/services/family.jpg".to_string()),
            display_order: Some(4),
        },
        Service {
            id: "employment-labour".to_string(),
            title: "Employment & Labour Relations".to_string(),
            summary: "Contracts, disputes, and compliance for employers and employees.".to_string(),
            description: "We draft and review employment contracts and policies, and act \
                in claims before the Employment and Labour Relations Court."
                .to_string(),
            header_image: Some("/images/services/employment.jpg".to_string()),
            display_order: Some(5),
        },
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "grace-mwangi".to_string(),
            name: "Grace Mwangi".to_string(),
            role: "Managing Partner".to_string(),
            category: "Partners".to_string(),
            photo: Some("/images/team/grace-mwangi.jpg".to_string()),
            email: Some("gmwangi@mwangiwekesa.co.ke".to_string()),
            bio: Some(
                "Grace leads the firm's corporate practice and has advised on some of \
                 the largest private acquisitions in East Africa."
                    .to_string(),
            ),
            display_order: Some(1),
        },
        TeamMember {
            id: "daniel-wekesa".to_string(),
            name: "Daniel Wekesa".to_string(),
            role: "Senior Partner".to_string(),
            category: "Partners".to_string(),
            photo: Some("/images/team/daniel-wekesa.jpg".to_string()),
            email: Some("dwekesa@mwangiwekesa.co.ke".to_string()),
            bio: Some(
                "Daniel is an advocate of over twenty years' standing with a litigation \
                 practice spanning commercial and constitutional matters."
                    .to_string(),
            ),
            display_order: Some(2),
        },
        TeamMember {
            id: "halima-yusuf".to_string(),
            name: "Prof. Halima Yusuf".to_string(),
            role: "Consulting Partner, Tax".to_string(),
            category: "Consulting Partners".to_string(),
            photo: Some("/images/team/halima-yusuf.jpg".to_string()),
            email: None,
            bio: Some(
                "Halima consults on revenue law and teaches tax policy at the \
                 University of Nairobi."
                    .to_string(),
            ),
            display_order: Some(1),
        },
        TeamMember {
            id: "brian-ochieng".to_string(),
            name: "Brian Ochieng".to_string(),
            role: "Associate, Dispute Resolution".to_string(),
            category: "Associates".to_string(),
            photo: Some("/images/team/brian-ochieng.jpg".to_string()),
            email: Some("bochieng@mwangiwekesa.co.ke".to_string()),
            bio: None,
            display_order: Some(1),
        },
        TeamMember {
            id: "naomi-chebet".to_string(),
            name: "Naomi Chebet".to_string(),
            role: "Associate, Conveyancing".to_string(),
            category: "Associates".to_string(),
            photo: Some("/images/team/naomi-chebet.jpg".to_string()),
            email: Some("nchebet@mwangiwekesa.co.ke".to_string()),
            bio: None,
            display_order: Some(2),
        },
        TeamMember {
            id: "esther-wanjiru".to_string(),
            name: "Esther Wanjiru".to_string(),
            role: "Practice Manager".to_string(),
            category: "Administrative Staff".to_string(),
            photo: None,
            email: Some("admin@mwangiwekesa.co.ke".to_string()),
            bio: None,
            display_order: Some(1),
        },
        TeamMember {
            id: "kevin-mutua".to_string(),
            name: "Kevin Mutua".to_string(),
            role: "Legal Assistant".to_string(),
            category: "Assistants".to_string(),
            photo: None,
            email: None,
            bio: None,
            display_order: Some(1),
        },
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "partners".to_string(),
            name: "Partners".to_string(),
            display_order: Some(1),
        },
        Category {
            id: "consulting-partners".to_string(),
            name: "Consulting Partners".to_string(),
            display_order: Some(2),
        },
        Category {
            id: "associates".to_string(),
            name: "Associates".to_string(),
            display_order: Some(3),
        },
        Category {
            id: "administrative-staff".to_string(),
            name: "Administrative Staff".to_string(),
            display_order: Some(4),
        },
        Category {
            id: "assistants".to_string(),
            name: "Assistants".to_string(),
            display_order: Some(5),
        },
    ]
}

pub fn job_positions() -> Vec<JobPosition> {
    vec![
        JobPosition {
            id: "senior-associate-disputes".to_string(),
            title: "Senior Associate - Dispute Resolution".to_string(),
            department: Some("Dispute Resolution".to_string()),
            location: "Nairobi".to_string(),
            employment_type: "Full-time".to_string(),
            summary: "At least five years' post-admission experience in commercial \
                litigation or arbitration, with High Court advocacy."
                .to_string(),
            apply_email: Some("careers@mwangiwekesa.co.ke".to_string()),
            deadline: None,
        },
        JobPosition {
            id: "pupillage-2026".to_string(),
            title: "Pupillage Programme 2026".to_string(),
            department: None,
            location: "Nairobi".to_string(),
            employment_type: "Pupillage".to_string(),
            summary: "A structured six-month pupillage rotating through the firm's \
                practice groups. Open to Kenya School of Law graduates."
                .to_string(),
            apply_email: Some("careers@mwangiwekesa.co.ke".to_string()),
            deadline: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FALLBACK_CATEGORY_ORDER;

    #[test]
    fn every_fallback_dataset_is_non_empty() {
        assert!(!services().is_empty());
        assert!(!team_members().is_empty());
        assert!(!categories().is_empty());
        assert!(!job_positions().is_empty());
    }

    #[test]
    fn fallback_members_use_recognised_categories() {
        for member in team_members() {
            assert!(
                FALLBACK_CATEGORY_ORDER.contains(&member.category.as_str()),
                "unrecognised category: {}",
                member.category
            );
        }
    }

    #[test]
    fn fallback_categories_match_the_fixed_order() {
        let names: Vec<String> = categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, FALLBACK_CATEGORY_ORDER);
    }
}
