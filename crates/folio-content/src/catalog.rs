use folio_types::{Category, Project, ProjectSort, SiteContent};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }
}

/// Read-only queries over the projects of a feed. Results keep feed order
/// unless a sort says otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    projects: &'a [Project],
}

impl<'a> Catalog<'a> {
    pub fn new(content: &'a SiteContent) -> Self {
        Self {
            projects: &content.projects,
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects flagged as featured; every project when none is flagged.
    pub fn featured(&self) -> Vec<&'a Project> {
        let featured: Vec<_> = self.projects.iter().filter(|p| p.featured).collect();
        if featured.is_empty() {
            self.projects.iter().collect()
        } else {
            featured
        }
    }

    /// Categories that at least one project uses, in `Category::ALL` order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|category| self.projects.iter().any(|p| p.category == *category))
            .collect()
    }

    pub fn listing(&self, filter: CategoryFilter, sort: ProjectSort) -> Vec<&'a Project> {
        let mut projects: Vec<_> = self.projects.iter().filter(|p| filter.matches(p)).collect();

        // Stable sorts: equal keys stay in feed order.
        match sort {
            ProjectSort::Newest => projects.sort_by(|a, b| b.year.cmp(&a.year)),
            ProjectSort::Oldest => projects.sort_by(|a, b| a.year.cmp(&b.year)),
            ProjectSort::TitleAsc => projects.sort_by(|a, b| compare_titles(a, b)),
            ProjectSort::TitleDesc => projects.sort_by(|a, b| compare_titles(b, a)),
        }

        projects
    }

    pub fn project(&self, id: &str) -> Option<&'a Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Unknown ids fall back to the first project.
    pub fn project_or_first(&self, id: &str) -> Option<&'a Project> {
        self.project(id).or_else(|| {
            tracing::debug!(id, "unknown project id, showing the first project");
            self.projects.first()
        })
    }

    /// Up to `limit` other projects: same category first, then the rest,
    /// each group in feed order.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&'a Project> {
        let category = self.project(id).map(|p| p.category);
        let others = self.projects.iter().filter(|p| p.id != id);

        let (mut same, rest): (Vec<_>, Vec<_>) =
            others.partition(|p| Some(p.category) == category);

        same.extend(rest);
        same.truncate(limit);
        same
    }
}

fn compare_titles(a: &Project, b: &Project) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Profile, ThumbnailFit};

    fn project(id: &str, title: &str, category: Category, year: u16, featured: bool) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            location: "Buenos Aires".to_string(),
            category,
            year,
            client: None,
            architect: None,
            description: Vec::new(),
            main_image: None,
            images: Vec::new(),
            services: Vec::new(),
            featured,
            thumbnail_fit: ThumbnailFit::Cover,
        }
    }

    fn content() -> SiteContent {
        SiteContent {
            profile: Profile::default(),
            contact: Default::default(),
            projects: vec![
                project("1", "Pabellón", Category::Cultural, 2023, true),
                project("2", "arenales", Category::Residential, 2022, true),
                project("3", "Casas", Category::Urban, 2022, false),
                project("4", "Quirno", Category::Residential, 2023, false),
                project("5", "Biblioteca", Category::Public, 2021, false),
                project("6", "Refugio", Category::Residential, 2021, false),
            ],
        }
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_featured() {
        let content = content();
        assert_eq!(ids(&Catalog::new(&content).featured()), ["1", "2"]);

        let mut plain = content.clone();
        plain.projects.iter_mut().for_each(|p| p.featured = false);
        assert_eq!(Catalog::new(&plain).featured().len(), 6);
    }

    #[test]
    fn test_listing_by_year_keeps_feed_order_for_ties() {
        let content = content();
        let catalog = Catalog::new(&content);

        assert_eq!(
            ids(&catalog.listing(CategoryFilter::All, ProjectSort::Newest)),
            ["1", "4", "2", "3", "5", "6"]
        );
        assert_eq!(
            ids(&catalog.listing(CategoryFilter::All, ProjectSort::Oldest)),
            ["5", "6", "2", "3", "1", "4"]
        );
    }

    #[test]
    fn test_listing_by_title_ignores_case() {
        let content = content();
        let catalog = Catalog::new(&content);

        assert_eq!(
            ids(&catalog.listing(CategoryFilter::All, ProjectSort::TitleAsc)),
            ["2", "5", "3", "1", "4", "6"]
        );
        assert_eq!(
            ids(&catalog.listing(CategoryFilter::All, ProjectSort::TitleDesc)),
            ["6", "4", "1", "3", "5", "2"]
        );
    }

    #[test]
    fn test_listing_filter() {
        let content = content();
        let catalog = Catalog::new(&content);

        let residential = catalog.listing(
            CategoryFilter::Only(Category::Residential),
            ProjectSort::Newest,
        );
        assert_eq!(ids(&residential), ["4", "2", "6"]);

        let commercial = catalog.listing(
            CategoryFilter::Only(Category::Commercial),
            ProjectSort::Newest,
        );
        assert!(commercial.is_empty());
    }

    #[test]
    fn test_categories_in_use() {
        let content = content();
        assert_eq!(
            Catalog::new(&content).categories(),
            [Category::Residential, Category::Cultural, Category::Public, Category::Urban]
        );
    }

    #[test]
    fn test_project_lookup() {
        let content = content();
        let catalog = Catalog::new(&content);

        assert_eq!(catalog.project("4").map(|p| p.title.as_str()), Some("Quirno"));
        assert!(catalog.project("99").is_none());
        assert_eq!(catalog.project_or_first("99").map(|p| p.id.as_str()), Some("1"));

        let empty = SiteContent::default();
        assert!(Catalog::new(&empty).project_or_first("1").is_none());
    }

    #[test]
    fn test_related_prefers_same_category() {
        let content = content();
        let catalog = Catalog::new(&content);

        assert_eq!(ids(&catalog.related("2", 3)), ["4", "6", "1"]);
        assert_eq!(ids(&catalog.related("3", 2)), ["1", "2"]);
        assert!(catalog.related("1", 0).is_empty());
        assert_eq!(catalog.related("1", 10).len(), 5);
    }
}
