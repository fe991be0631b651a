//! Team member card component

use dioxus::prelude::*;

use crate::types::TeamMember;

/// Props for MemberCard
#[derive(Props, Clone, PartialEq)]
pub struct MemberCardProps {
    pub member: TeamMember,
}

/// Card for one member of the firm.
#[component]
pub fn MemberCard(props: MemberCardProps) -> Element {
    let member = &props.member;

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 text-center hover:shadow-lg transition-all duration-200",

            if let Some(photo) = &member.photo {
                img {
                    class: "w-24 h-24 rounded-full object-cover mx-auto mb-4",
                    src: "{photo}",
                    alt: "{member.name}"
                }
            } else {
                div {
                    class: "w-24 h-24 rounded-full bg-emerald-100 text-emerald-900 text-2xl font-semibold flex items-center justify-center mx-auto mb-4",
                    "{initials(&member.name)}"
                }
            }

            h3 { class: "text-base font-semibold text-gray-900", "{member.name}" }
            p { class: "text-sm text-emerald-800 mb-2", "{member.role}" }

            if let Some(bio) = &member.bio {
                p { class: "text-sm text-gray-600 line-clamp-3 mb-2", "{bio}" }
            }

            if let Some(email) = &member.email {
                a {
                    class: "text-sm text-emerald-700 hover:text-emerald-900",
                    href: "mailto:{email}",
                    "{email}"
                }
            }
        }
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("Grace Mwangi"), "GM");
        assert_eq!(initials("Prof. Halima Yusuf"), "PH");
        assert_eq!(initials("Cher"), "C");
    }
}
