//! Embedded site content and section metadata.

use folio_content::builtin_site;
use folio_types::Section;

#[test]
fn embedded_site_has_the_authored_shape() {
    let site = builtin_site();
    assert_eq!(site.profile.given_name, "Hillary");
    assert_eq!(site.profile.family_name, "Mark");
    assert_eq!(site.skills.len(), 6);
    assert!(site.skills.iter().all(|group| group.items.len() == 4));
    assert_eq!(site.projects.len(), 6);
    assert_eq!(site.contact_methods.len(), 4);
    assert!(!site.contact_lead.is_empty());
}

#[test]
fn first_two_projects_carry_live_links() {
    let site = builtin_site();
    assert!(site.projects[0].demo.is_some());
    assert!(site.projects[0].repo.is_some());
    assert!(site.projects[2].demo.is_none());
}

#[test]
fn sections_expose_nav_labels_and_headings() {
    assert_eq!(Section::ALL.len(), 5);
    assert_eq!(Section::Hero.label(), "Home");
    assert_eq!(Section::About.heading(), "About Me");
    assert_eq!(Section::Contact.heading(), "Let's Work Together");
}
