//! Built-in documentation catalog for Waymark.
//!
//! The open-source contributor guide: fourteen sections, each mapped to a
//! content folder with a two-digit ordering prefix. Page files carry the same
//! prefix (`03-fork`) except the landing page, which is always `index`.
//!
//! The table is built once on first access and shared for the life of the
//! process.

use std::sync::LazyLock;

use wm_nav::{DocItem, DocSection, NavIndex};

static CATALOG: LazyLock<Vec<DocSection>> = LazyLock::new(build);

/// The built-in sections in declaration order.
pub fn sections() -> &'static [DocSection] {
    &CATALOG
}

/// Build a [`NavIndex`] over the built-in catalog.
#[must_use]
pub fn index() -> NavIndex {
    NavIndex::new(sections().to_vec())
}

fn section(
    slug: &str,
    title: &str,
    order: i32,
    description: &str,
    items: Vec<DocItem>,
) -> DocSection {
    let section = DocSection::new(slug, title, format!("{order:02}-{slug}"), order)
        .with_description(description);
    items.into_iter().fold(section, DocSection::with_item)
}

fn page(title: &str, slug: &str, file: &str, description: &str) -> DocItem {
    DocItem::new(title, slug, file).with_description(description)
}

#[allow(clippy::too_many_lines)]
fn build() -> Vec<DocSection> {
    vec![
        section(
            "before-you-start",
            "Before You Start",
            0,
            "Most docs miss this. This section filters unserious contributors early.",
            vec![
                page("Overview", "index", "index", "What to know before contributing"),
                page(
                    "What Open Source Really Is",
                    "what-open-source-is",
                    "01-what-open-source-is",
                    "And what it's not",
                ),
                page("Common Myths", "myths", "02-myths", "Myths new contributors believe"),
                page(
                    "Time Commitment & Expectations",
                    "expectations",
                    "03-expectations",
                    "The reality of open source",
                ),
                page(
                    "Beginner vs Contributor vs Maintainer",
                    "roles",
                    "04-roles",
                    "Understanding the hierarchy",
                ),
                page(
                    "How Contributions Are Evaluated",
                    "evaluation",
                    "05-evaluation",
                    "Reality check on what matters",
                ),
            ],
        ),
        section(
            "getting-started",
            "Getting Started",
            1,
            "Your first steps into open source contribution.",
            vec![
                page("Overview", "index", "index", "Your first steps in open source"),
                page(
                    "Getting Started in Open Source",
                    "introduction",
                    "01-introduction",
                    "The beginning of your journey",
                ),
                page(
                    "Choosing Your First Contribution",
                    "choosing-contribution",
                    "02-choosing-contribution",
                    "Docs, Tests, or Code?",
                ),
                page("How to Fork a Repository", "fork", "03-fork", "Step-by-step forking guide"),
                page(
                    "Clone and Setup Locally",
                    "clone",
                    "04-clone",
                    "Getting code on your machine",
                ),
                page(
                    "Understanding Project Structure",
                    "project-structure",
                    "05-project-structure",
                    "Navigating unfamiliar codebases",
                ),
                page(
                    "How to Understand an Unknown Codebase",
                    "understand-codebase",
                    "06-understand-codebase",
                    "Strategies for reading code",
                ),
                page(
                    "Reading Project Files",
                    "project-files",
                    "07-project-files",
                    "README, CONTRIBUTING, CODE_OF_CONDUCT",
                ),
                page(
                    "Running the Project Locally",
                    "running-locally",
                    "08-running-locally",
                    "Getting the project to run",
                ),
                page(
                    "Common Setup Errors",
                    "setup-errors",
                    "09-setup-errors",
                    "How to fix common issues",
                ),
            ],
        ),
        section(
            "git-github",
            "Git & GitHub Essentials",
            2,
            "Non-negotiable skills. Skip this and you'll create noise instead of value.",
            vec![
                page("Overview", "index", "index", "Master version control"),
                page("Git Basics You Must Know", "basics", "01-basics", "Essential git commands"),
                page(
                    "Branching Strategy Explained",
                    "branching",
                    "02-branching",
                    "How to organize branches",
                ),
                page("Commit Messages", "commits", "03-commits", "Good vs bad examples"),
                page(
                    "Syncing Fork with Upstream",
                    "syncing",
                    "04-syncing",
                    "Keeping your fork updated",
                ),
                page(
                    "Resolving Merge Conflicts",
                    "conflicts",
                    "05-conflicts",
                    "Handling conflicting changes",
                ),
                page(
                    "Rewriting History",
                    "rewriting-history",
                    "06-rewriting-history",
                    "Rebase, squash, and amend",
                ),
                page(
                    "When Not to Force Push",
                    "force-push",
                    "07-force-push",
                    "Avoiding destructive operations",
                ),
            ],
        ),
        section(
            "first-contribution",
            "Making Your First Contribution",
            3,
            "From finding issues to getting your code merged.",
            vec![
                page("Overview", "index", "index", "Your first pull request"),
                page(
                    "Finding Good First Issues",
                    "finding-issues",
                    "01-finding-issues",
                    "And spotting fake ones",
                ),
                page(
                    "Picking Issues That Get Merged",
                    "picking-issues",
                    "02-picking-issues",
                    "Strategic issue selection",
                ),
                page(
                    "Asking Questions the Right Way",
                    "asking-questions",
                    "03-asking-questions",
                    "Get help without being ignored",
                ),
                page(
                    "Claiming an Issue",
                    "claiming-issues",
                    "04-claiming-issues",
                    "And when not to",
                ),
                page(
                    "Writing Clean, Reviewable Code",
                    "clean-code",
                    "05-clean-code",
                    "Code that maintainers love",
                ),
                page(
                    "Adding Tests",
                    "adding-tests",
                    "06-adding-tests",
                    "When required, when optional",
                ),
                page(
                    "Documentation Contributions",
                    "documentation",
                    "07-documentation",
                    "Contributions that matter",
                ),
            ],
        ),
        section(
            "issues-prs",
            "Issues & Pull Requests",
            4,
            "Deep dive into the GitHub workflow.",
            vec![
                page("Overview", "index", "index", "Mastering the workflow"),
                page(
                    "How to Raise a Good Issue",
                    "raising-issues",
                    "01-raising-issues",
                    "Issues that get attention",
                ),
                page(
                    "Bug Reports vs Feature Requests",
                    "issue-types",
                    "02-issue-types",
                    "Know the difference",
                ),
                page(
                    "Writing a High-Quality PR",
                    "writing-prs",
                    "03-writing-prs",
                    "PRs that get merged",
                ),
                page(
                    "PR Description Template",
                    "pr-template",
                    "04-pr-template",
                    "What maintainers expect",
                ),
                page(
                    "Responding to Code Reviews",
                    "code-reviews",
                    "05-code-reviews",
                    "Handle feedback gracefully",
                ),
                page(
                    "Handling Rejection",
                    "handling-rejection",
                    "06-handling-rejection",
                    "Without burning bridges",
                ),
                page(
                    "Iterating on Feedback",
                    "iterating-feedback",
                    "07-iterating-feedback",
                    "Improve efficiently",
                ),
                page(
                    "Closing PRs the Right Way",
                    "closing-prs",
                    "08-closing-prs",
                    "Clean up after yourself",
                ),
            ],
        ),
        section(
            "programs",
            "Open Source Programs",
            5,
            "Programs that can accelerate your journey. This section prepares, not just informs.",
            vec![
                page("Overview", "index", "index", "All programs at a glance"),
                page("Google Summer of Code (GSoC)", "gsoc", "01-gsoc", "The complete guide"),
                page(
                    "Linux Foundation Mentorship (LFX)",
                    "lfx",
                    "02-lfx",
                    "Enterprise open source",
                ),
                page("Season of Bugs (SOB)", "sob", "03-sob", "Security-focused contributions"),
                page("Code for GovTech (C4GT)", "c4gt", "04-c4gt", "Government tech projects"),
                page(
                    "Outreachy",
                    "outreachy",
                    "05-outreachy",
                    "Internships for underrepresented groups",
                ),
                page(
                    "Hacktoberfest",
                    "hacktoberfest",
                    "06-hacktoberfest",
                    "Annual contribution event",
                ),
                page(
                    "Comparing All Programs",
                    "comparison",
                    "07-comparison",
                    "Side-by-side comparison",
                ),
            ],
        ),
        section(
            "choosing-org",
            "Choosing the Right Organization",
            6,
            "Not all organizations are created equal.",
            vec![
                page("Overview", "index", "index", "Finding your fit"),
                page(
                    "Signals of a Healthy Organization",
                    "healthy-signals",
                    "01-healthy-signals",
                    "What to look for",
                ),
                page(
                    "Evaluating Code Quality",
                    "code-quality",
                    "02-code-quality",
                    "Technical assessment",
                ),
                page(
                    "Mentor Availability",
                    "mentor-availability",
                    "03-mentor-availability",
                    "Responsiveness matters",
                ),
                page(
                    "Activity Metrics That Matter",
                    "activity-metrics",
                    "04-activity-metrics",
                    "Data-driven decisions",
                ),
                page(
                    "Red Flags You Should Never Ignore",
                    "red-flags",
                    "05-red-flags",
                    "Warning signs",
                ),
                page(
                    "When to Leave an Organization",
                    "when-to-leave",
                    "06-when-to-leave",
                    "Know when to walk away",
                ),
            ],
        ),
        section(
            "proposals",
            "Writing a Winning Proposal",
            7,
            "Most applicants fail here. This section is brutally practical.",
            vec![
                page("Overview", "index", "index", "Crafting compelling proposals"),
                page(
                    "Understanding the Problem Statement",
                    "problem-statement",
                    "01-problem-statement",
                    "Read between the lines",
                ),
                page(
                    "Researching Existing Solutions",
                    "research",
                    "02-research",
                    "Do your homework",
                ),
                page(
                    "Defining Clear Deliverables",
                    "deliverables",
                    "03-deliverables",
                    "Concrete outcomes",
                ),
                page(
                    "Creating a Realistic Timeline",
                    "timeline",
                    "04-timeline",
                    "Week-by-week planning",
                ),
                page(
                    "Technical Depth vs Buzzwords",
                    "technical-depth",
                    "05-technical-depth",
                    "Show real knowledge",
                ),
                page(
                    "Writing Style That Mentors Respect",
                    "writing-style",
                    "06-writing-style",
                    "Communication matters",
                ),
                page("Common Proposal Mistakes", "mistakes", "07-mistakes", "What to avoid"),
                page(
                    "Proposal Review Checklist",
                    "checklist",
                    "08-checklist",
                    "Final verification",
                ),
            ],
        ),
        section(
            "communication",
            "Communication & Etiquette",
            8,
            "How to communicate effectively in open source.",
            vec![
                page("Overview", "index", "index", "Open source communication"),
                page(
                    "How Maintainers Think",
                    "maintainer-mindset",
                    "01-maintainer-mindset",
                    "Understand their perspective",
                ),
                page(
                    "Async Communication Best Practices",
                    "async-communication",
                    "02-async-communication",
                    "Working across timezones",
                ),
                page("Asking for Help", "asking-help", "03-asking-help", "Without being ignored"),
                page(
                    "Disagreements & Conflict Resolution",
                    "conflict-resolution",
                    "04-conflict-resolution",
                    "Handle disagreements",
                ),
                page(
                    "Public vs Private Communication",
                    "public-private",
                    "05-public-private",
                    "Know the difference",
                ),
                page("Respecting Time Zones", "timezones", "06-timezones", "Global collaboration"),
            ],
        ),
        section(
            "tooling",
            "Tooling & Developer Setup",
            9,
            "Essential developer tools and configurations.",
            vec![
                page("Overview", "index", "index", "Essential developer tools"),
                page(
                    "Code Editors & IDE Setup",
                    "editors",
                    "01-editors",
                    "Configuring your environment",
                ),
                page("Debugging Techniques", "debugging", "02-debugging", "Find and fix bugs"),
                page(
                    "Linters, Formatters & CI",
                    "linters-ci",
                    "03-linters-ci",
                    "Code quality tools",
                ),
                page(
                    "Understanding CI Failures",
                    "ci-failures",
                    "04-ci-failures",
                    "Fix pipeline issues",
                ),
                page(
                    "Logs, Stack Traces & Error Reports",
                    "logs-errors",
                    "05-logs-errors",
                    "Reading error output",
                ),
            ],
        ),
        section(
            "long-term",
            "Becoming a Long-Term Contributor",
            10,
            "Moving beyond beginner contributions.",
            vec![
                page("Overview", "index", "index", "Sustaining your contributions"),
                page(
                    "Moving Beyond Good First Issues",
                    "beyond-first-issues",
                    "01-beyond-first-issues",
                    "Level up your contributions",
                ),
                page(
                    "Taking Ownership of Components",
                    "ownership",
                    "02-ownership",
                    "Become a domain expert",
                ),
                page(
                    "Helping Review PRs",
                    "reviewing-prs",
                    "03-reviewing-prs",
                    "Give back to the community",
                ),
                page(
                    "Writing Design Docs",
                    "design-docs",
                    "04-design-docs",
                    "Document architecture",
                ),
                page(
                    "Becoming a Maintainer",
                    "becoming-maintainer",
                    "05-becoming-maintainer",
                    "The path to maintainership",
                ),
                page("Burnout Prevention", "burnout", "06-burnout", "Sustainable contribution"),
            ],
        ),
        section(
            "career",
            "Career & Growth",
            11,
            "Leverage open source for career opportunities.",
            vec![
                page("Overview", "index", "index", "Career benefits of open source"),
                page(
                    "How Open Source Impacts Hiring",
                    "hiring-impact",
                    "01-hiring-impact",
                    "What employers think",
                ),
                page(
                    "Building a Strong Contributor Profile",
                    "contributor-profile",
                    "02-contributor-profile",
                    "Stand out from the crowd",
                ),
                page(
                    "What Recruiters Actually Look At",
                    "recruiter-perspective",
                    "03-recruiter-perspective",
                    "Inside the hiring process",
                ),
                page(
                    "Turning Contributions into Case Studies",
                    "case-studies",
                    "04-case-studies",
                    "Tell your story",
                ),
                page(
                    "Resume & Portfolio Integration",
                    "resume-portfolio",
                    "05-resume-portfolio",
                    "Showcase your work",
                ),
            ],
        ),
        section(
            "faqs",
            "FAQs & Common Failures",
            12,
            "Common questions and failure patterns.",
            vec![
                page("Overview", "index", "index", "Common questions answered"),
                page(
                    "Why PRs Get Ignored",
                    "prs-ignored",
                    "01-prs-ignored",
                    "Understand the silence",
                ),
                page(
                    "Why PRs Get Rejected",
                    "prs-rejected",
                    "02-prs-rejected",
                    "Learn from rejection",
                ),
                page(
                    "I Don't Feel Good Enough",
                    "not-good-enough",
                    "03-not-good-enough",
                    "Overcoming self-doubt",
                ),
                page(
                    "Handling Imposter Syndrome",
                    "imposter-syndrome",
                    "04-imposter-syndrome",
                    "You belong here",
                ),
                page(
                    "When to Pause or Pivot",
                    "pause-pivot",
                    "05-pause-pivot",
                    "Know when to step back",
                ),
            ],
        ),
        section(
            "final-check",
            "Final Reality Check",
            13,
            "The truth about what it takes to succeed.",
            vec![
                page("Overview", "index", "index", "Are you ready?"),
                page(
                    "Why Most People Quit Open Source",
                    "why-people-quit",
                    "01-why-people-quit",
                    "The hard truth",
                ),
                page(
                    "What Separates Top 1% Contributors",
                    "top-contributors",
                    "02-top-contributors",
                    "Excellence in open source",
                ),
                page(
                    "Your 30-Day Action Plan",
                    "action-plan",
                    "03-action-plan",
                    "Start your journey",
                ),
            ],
        ),
    ]
}
