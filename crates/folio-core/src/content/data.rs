use super::models::*;

pub static PROFILE: Profile = Profile {
    name: "Ashman Malik",
    headline: "Product Owner & Developer Experience Specialist",
    summary: "With 5+ years of experience in product development and technical roles, I specialize in \
              enhancing developer experiences and building innovative solutions.",
    about_heading: "Product Owner & Developer Experience Specialist",
    about: &[
        AboutCard {
            title: "Professional Profile",
            icon: Icon::User,
            body: "With 5+ years of experience as a Product Specialist and Product Owner at Cuscal, I have \
                   extensive skills in stakeholder collaboration, feature development, issue resolution, and \
                   documentation design. I excel at bridging technical and business requirements to deliver \
                   exceptional products.",
        },
        AboutCard {
            title: "Technical Expertise",
            icon: Icon::Code,
            body: "My technical background spans full-stack development, including React, Node.js, and \
                   Unity3D. I've implemented CI/CD pipelines, developed internal tools, and enhanced \
                   documentation with OpenAPI specifications. My experience with AR/VR technologies adds a \
                   unique dimension to my skill set.",
        },
        AboutCard {
            title: "Industry Experience",
            icon: Icon::Briefcase,
            body: "I've worked extensively in the financial technology sector, focusing on Open Banking, data \
                   access, and developer experience. My experience at Basiq and Cuscal has given me deep \
                   insights into financial data orchestration, API development, and regulatory compliance in \
                   the banking sector.",
        },
        AboutCard {
            title: "Languages & Education",
            icon: Icon::Languages,
            body: "I'm fluent in English and Urdu, with limited working proficiency in German. I hold a \
                   Master's degree in Information Technology from Griffith University and a Bachelor's degree \
                   in Computer Science from COMSATS Institute of Information Technology.",
        },
    ],
    links: &[
        SocialLink {
            label: "GitHub",
            icon: Icon::Github,
            url: "https://github.com/Cuscal-Ashman",
        },
        SocialLink {
            label: "LinkedIn",
            icon: Icon::Linkedin,
            url: "https://www.linkedin.com/in/ashman-malik",
        },
        SocialLink {
            label: "Email",
            icon: Icon::Mail,
            url: "mailto:ashman.malik@outlook.com",
        },
    ],
    highlights: &["Product Owner", "React", "Node.js", "API Design", "Agile", "Unity3D"],
};

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "About", target: SectionId::About },
    NavItem { label: "Experience", target: SectionId::Experience },
    NavItem { label: "Skills", target: SectionId::Skills },
    NavItem { label: "Projects", target: SectionId::Projects },
    NavItem { label: "Contact", target: SectionId::Contact },
];

pub static EXPERIENCE: [ExperienceEntry; 5] = [
    ExperienceEntry {
        title: "Associate Product Owner - Regulated Data Domain",
        organization: "Cuscal Limited",
        location: "Sydney, New South Wales, Australia",
        period: "November 2024 - Present",
        description: "Currently working as an Associate Product Owner in the Regulated Data Domain at Cuscal Limited.",
        tags: &["Product Management", "Agile", "Financial Services", "Open Banking"],
        color: "#3b82f6",
    },
    ExperienceEntry {
        title: "Product Owner",
        organization: "Basiq",
        location: "Manly, New South Wales, Australia",
        period: "June 2023 - November 2024",
        description: "Led product development focusing on enhancing developer experience, creating product \
                      roadmaps, aligning product with technology, automating documentation processes, and \
                      monitoring open banking and consent issues.",
        tags: &["Developer Experience", "Product Roadmaps", "JIRA Administration", "Documentation Automation"],
        color: "#8b5cf6",
    },
    ExperienceEntry {
        title: "Product Specialist",
        organization: "Basiq",
        location: "Manly, New South Wales, Australia",
        period: "February 2023 - June 2023",
        description: "Focused on enhancing developer experience, developing product roadmaps, aligning product \
                      with technology, and automating documentation processes.",
        tags: &["API Development", "Technical Documentation", "Developer Tools"],
        color: "#ec4899",
    },
    ExperienceEntry {
        title: "Technical Support Engineer",
        organization: "Basiq",
        location: "Manly, New South Wales, Australia",
        period: "December 2021 - February 2023",
        description: "Resolved Open Banking issues, implemented CI/CD pipelines, managed cross-functional \
                      issues, developed internal tools, and enhanced documentation with OpenAPI specifications.",
        tags: &["Open Banking", "CI/CD", "Technical Support", "OpenAPI"],
        color: "#10b981",
    },
    ExperienceEntry {
        title: "Technical Project Coordinator",
        organization: "Thinkun",
        location: "Sydney, Australia",
        period: "December 2019 - December 2021",
        description: "Collaborated with Project Managers, integrated new features, assessed system requirements, \
                      implemented front-end code using React JS, and developed server-side backend functionality.",
        tags: &["React JS", "NodeJS", "MySQL", "Project Coordination"],
        color: "#f59e0b",
    },
];

pub static SKILL_CATEGORIES: [SkillCategory; 8] = [
    SkillCategory {
        name: "Frontend Development",
        icon: Icon::Code,
        skills: &["React", "JavaScript", "HTML/CSS", "Tailwind CSS", "React Native"],
        color: "#3b82f6",
    },
    SkillCategory {
        name: "Backend Development",
        icon: Icon::Database,
        skills: &["Node.js", "Express", "MySQL", "NoSQL", "RESTful APIs", "OpenAPI"],
        color: "#10b981",
    },
    SkillCategory {
        name: "Product Management",
        icon: Icon::Layers,
        skills: &["Product Roadmaps", "User Stories", "Feature Prioritization", "Stakeholder Management"],
        color: "#8b5cf6",
    },
    SkillCategory {
        name: "Agile Methodologies",
        icon: Icon::Workflow,
        skills: &["Scrum", "Kanban", "Sprint Planning", "Backlog Refinement", "Retrospectives"],
        color: "#f59e0b",
    },
    SkillCategory {
        name: "Developer Experience",
        icon: Icon::Lightbulb,
        skills: &["API Design", "Documentation", "Developer Tools", "SDK Development"],
        color: "#ec4899",
    },
    SkillCategory {
        name: "Technical Skills",
        icon: Icon::Cpu,
        skills: &["CI/CD", "Git", "JIRA Administration", "Unity3D", "AR/VR Development"],
        color: "#6366f1",
    },
    SkillCategory {
        name: "Tools & Platforms",
        icon: Icon::Wrench,
        skills: &["AWS", "GitHub", "JIRA", "Confluence", "Figma", "Postman"],
        color: "#0ea5e9",
    },
    SkillCategory {
        name: "Certifications",
        icon: Icon::Award,
        skills: &["AWS Getting Started with Storage", "Agile Product Owner Role", "SQL", "Waterfall Project Management"],
        color: "#14b8a6",
    },
];

pub static SKILL_GROUPS: [SkillGroup; 6] = [
    SkillGroup { id: "frontend", name: "Frontend", color: "#3b82f6" },
    SkillGroup { id: "backend", name: "Backend", color: "#10b981" },
    SkillGroup { id: "product", name: "Product", color: "#8b5cf6" },
    SkillGroup { id: "agile", name: "Agile", color: "#f59e0b" },
    SkillGroup { id: "devex", name: "DevEx", color: "#ec4899" },
    SkillGroup { id: "technical", name: "Technical", color: "#6366f1" },
];

pub static SKILL_LEVELS: [SkillLevel; 13] = [
    SkillLevel { name: "React", group: "frontend", level: 0.9 },
    SkillLevel { name: "JavaScript", group: "frontend", level: 0.9 },
    SkillLevel { name: "Node.js", group: "backend", level: 0.85 },
    SkillLevel { name: "Product Roadmaps", group: "product", level: 0.9 },
    SkillLevel { name: "Scrum", group: "agile", level: 0.9 },
    SkillLevel { name: "API Design", group: "devex", level: 0.9 },
    SkillLevel { name: "CI/CD", group: "technical", level: 0.8 },
    SkillLevel { name: "HTML/CSS", group: "frontend", level: 0.85 },
    SkillLevel { name: "Express", group: "backend", level: 0.8 },
    SkillLevel { name: "User Stories", group: "product", level: 0.85 },
    SkillLevel { name: "Kanban", group: "agile", level: 0.85 },
    SkillLevel { name: "Documentation", group: "devex", level: 0.85 },
    SkillLevel { name: "Git", group: "technical", level: 0.9 },
];

pub static PROJECTS: [Project; 3] = [
    Project {
        id: "account-verification",
        title: "Account Verification BoilerPlate",
        description: "A comprehensive solution for verifying bank accounts using the Basiq API. This starter kit \
                      provides secure account verification, real-time balance checking, and transaction history \
                      analysis.",
        tech: &["JavaScript", "React", "Node.js", "OpenAPI"],
        repo_url: "https://github.com/basiqio-oss/account-verification-v3",
        demo_url: "https://av-demo.basiq.io/",
        image_url: "https://files.readme.io/2dcf482-DevHub_StarterKit_1080x800.png",
        features: &[
            "Secure account verification with multi-factor authentication",
            "Real-time balance checking and account monitoring",
            "Transaction history analysis with data visualization",
            "User-friendly interface with responsive design",
        ],
        color: "#3b82f6",
    },
    Project {
        id: "income-expense-verification-starterkit",
        title: "Income/Expense Verification BoilerPlate",
        description: "The Income/Expense Verification StarterKit automates the process of verifying a user's \
                      income and expenses. By securely connecting their bank account, it generates a \
                      comprehensive verification report through our Reports API.",
        tech: &["JavaScript", "Node.js", "REST API", "AWS Lambda"],
        repo_url: "https://github.com/Basiq-Income-Expense-Verification-StarterKit",
        demo_url: "https://iv-demo.basiq.io/",
        image_url: "https://files.readme.io/88fc8ac887132e1a095a02367f990af654547c3ace1f0bfed07badcc4c6329a8-ssvve.png",
        features: &[
            "Secure bank account connection for income and expense data",
            "Automated report generation using our Reports API",
            "Detailed user-level analysis with metrics like average monthly income and stability",
            "Customizable filters for tailored report generation",
        ],
        color: "#10b981",
    },
    Project {
        id: "api-reference",
        title: "Basiq Developer Hub",
        description: "The official API reference for the Basiq platform, providing comprehensive documentation \
                      on endpoints, parameters, and responses for developers integrating with the platform.",
        tech: &["JavaScript", "OpenAPI", "Swagger", "HTML/CSS"],
        repo_url: "https://github.com/basiqio-oss/basiq-docs",
        demo_url: "https://api.basiq.io/",
        image_url: "https://api.basiq.io/api-ref.png",
        features: &[
            "Interactive API explorer with request/response examples",
            "Comprehensive OpenAPI specification",
            "Authentication guides and security documentation",
            "Error handling and troubleshooting resources",
        ],
        color: "#10b981",
    },
];

pub static CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        icon: Icon::Mail,
        label: "Email",
        value: "ashman.malik@outlook.com",
        link: Some("mailto:ashman.malik@outlook.com"),
    },
    ContactInfo {
        icon: Icon::MapPin,
        label: "Location",
        value: "Brisbane, Queensland, Australia",
        link: None,
    },
    ContactInfo {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        value: "linkedin.com/in/ashman-malik",
        link: Some("https://www.linkedin.com/in/ashman-malik"),
    },
    ContactInfo {
        icon: Icon::Github,
        label: "GitHub",
        value: "github.com/Cuscal-Ashman",
        link: Some("https://github.com/Cuscal-Ashman"),
    },
];

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: &PROFILE,
    nav: &NAV_ITEMS,
    experience: &EXPERIENCE,
    skill_categories: &SKILL_CATEGORIES,
    skill_groups: &SKILL_GROUPS,
    skill_levels: &SKILL_LEVELS,
    projects: &PROJECTS,
    contact: &CONTACT_INFO,
};
