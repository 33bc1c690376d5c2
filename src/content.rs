//! Static page content rendered by the app components.

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub performance_metrics: Option<&'static str>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.period.contains("Present")
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
}

impl Project {
    /// Short reference code shown in the project modal footer.
    pub fn ref_code(&self) -> String {
        let compact: String = self.title.split_whitespace().collect();
        let prefix: String = compact.chars().take(6).collect();
        format!("0x-PRJ-{}-NODE", prefix.to_uppercase())
    }
}

pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub static EXPERIENCES: [Experience; 3] = [
    Experience {
        company: "StatusNeo",
        role: "Senior Consultant",
        period: "May 2025 — Present",
        description: &[
            "Designed and developed end-to-end features using React.js, Next.js, Node.js, and Express.js for enterprise-grade applications.",
            "Built and maintained REST APIs with secure authentication and optimized database queries.",
            "Implemented scalable state management using Redux and improved frontend performance by 30% through memoization and code-splitting.",
            "Integrated backend services with third-party systems and internal platforms, ensuring reliability and data consistency.",
            "Used React Query for efficient server-state management, reducing API response times by 40%.",
        ],
        skills: &["React.js", "Next.js", "Node.js", "Express.js", "Redux", "React Query"],
        performance_metrics: Some("30% performance boost; 40% reduction in response latency"),
    },
    Experience {
        company: "TransFi",
        role: "Full Stack Developer",
        period: "Feb 2025 — May 2025",
        description: &[
            "Led development of a live crypto–fiat on-ramp platform with scalable frontend flows and secure backend services.",
            "Built APIs using Node.js, Express.js, MongoDB covering KYC, payments, and transaction lifecycles.",
            "Reduced frontend load time by 30% via code-splitting, memoization, and data caching.",
        ],
        skills: &["Node.js", "Express.js", "MongoDB", "Fintech", "Payment Gateways"],
        performance_metrics: Some("30% load time reduction; Live crypto-fiat production launch"),
    },
    Experience {
        company: "Tata Consultancy Services (TCS)",
        role: "Full Stack Developer",
        period: "Apr 2021 — Feb 2025",
        description: &[
            "Improved web application performance by 30% through React optimization and lazy loading.",
            "Developed backend services using Node.js, Express.js for data aggregation and integrations.",
            "Designed REST APIs with JWT authentication and role-based access control.",
            "Automated workflows, reducing ServiceNow tickets by 60%.",
        ],
        skills: &["React", "Node.js", "Express.js", "JWT", "RBAC", "Automation"],
        performance_metrics: Some("60% reduction in support tickets; 30% performance improvement"),
    },
];

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "6E Operation Control Centre Hub",
        description: "Enterprise flight operations system for IndiGo with real-time data aggregation APIs. Orchestrates mission-critical airline operations visualization.",
        tech: &["Next.js", "React.js", "TypeScript", "Node.js"],
        link: None,
    },
    Project {
        title: "Honeywell Manufacturing Portal",
        description: "MERN Stack Manufacturing workflow platform with role-based access, audits, and optimized MongoDB queries.",
        tech: &["MERN Stack", "MongoDB", "React", "Node.js"],
        link: None,
    },
    Project {
        title: "E-Commerce Web Application",
        description: "Full-stack platform with JWT auth, Stripe payments, admin dashboards, and optimized search APIs.",
        tech: &["MERN Stack", "JWT", "Stripe", "React"],
        link: None,
    },
    Project {
        title: "Airbnb Clone",
        description: "End-to-end booking platform with SSR, authentication, and database-backed listings using Supabase.",
        tech: &["Next.js", "Prisma", "PostgreSQL", "Supabase"],
        link: None,
    },
];

pub static SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Frontend",
        items: &[
            "React.js",
            "Next.js",
            "JavaScript (ES6+)",
            "TypeScript",
            "HTML5",
            "CSS3",
            "Redux",
            "Context API",
            "Tailwind CSS",
            "Material UI",
            "Shadcn UI",
        ],
    },
    SkillGroup {
        category: "Backend",
        items: &[
            "Node.js",
            "Express.js",
            "REST API Design",
            "Authentication",
            "Webhooks",
            "Integrations",
        ],
    },
    SkillGroup {
        category: "Databases",
        items: &["MongoDB", "MySQL", "PostgreSQL"],
    },
    SkillGroup {
        category: "Tools & Ecosystem",
        items: &[
            "Git",
            "GitHub",
            "CI/CD",
            "Jenkins",
            "Datadog",
            "Mixpanel",
            "StatCounter",
            "Prisma",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_position_detection() {
        assert!(EXPERIENCES[0].is_current());
        assert!(!EXPERIENCES[2].is_current());
    }

    #[test]
    fn test_project_ref_code() {
        let project = Project {
            title: "Honeywell Manufacturing Portal",
            description: "",
            tech: &[],
            link: None,
        };
        assert_eq!(project.ref_code(), "0x-PRJ-HONEYW-NODE");
    }
}
