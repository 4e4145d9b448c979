//! Compiled-in portfolio content.
//!
//! Every section of the page reads from the records defined here. The data
//! is fixed at build time; callers receive owned copies in catalog order.

mod resource;

pub use resource::*;

fn stack(items: &[(&str, TechCategory)]) -> Vec<TechStackItem> {
    items
        .iter()
        .map(|(name, category)| TechStackItem {
            name: name.to_string(),
            category: *category,
        })
        .collect()
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    category: ProjectCategory,
    tech_stack: Vec<TechStackItem>,
) -> Project {
    Project {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        image: image.to_owned(),
        category,
        tech_stack,
        project_url: Some("#".to_owned()),
        github_url: Some("#".to_owned()),
        video_url: None,
    }
}

/// Returns the project gallery in display order.
///
pub fn projects() -> Vec<Project> {
    use TechCategory::*;

    vec![
        project(
            "1",
            "E-Commerce Platform",
            "A modern, responsive e-commerce platform with advanced filtering, payment integration, and real-time inventory management.",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&w=800&q=80",
            ProjectCategory::WebDevelopment,
            stack(&[
                ("React", Frontend),
                ("TypeScript", Language),
                ("Node.js", Backend),
                ("PostgreSQL", Database),
            ]),
        ),
        project(
            "2",
            "AI-Powered Analytics Dashboard",
            "Comprehensive analytics platform with machine learning insights, real-time data visualization, and predictive modeling.",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=800&q=80",
            ProjectCategory::MachineLearning,
            stack(&[
                ("Next.js", Frontend),
                ("Python", Language),
                ("TensorFlow", Ml),
                ("MongoDB", Database),
            ]),
        ),
        project(
            "3",
            "Mobile Task Manager",
            "Cross-platform mobile application for task management with offline sync, push notifications, and collaborative features.",
            "https://images.unsplash.com/photo-1611224923853-80b023f02d71?auto=format&fit=crop&w=800&q=80",
            ProjectCategory::MobileDevelopment,
            stack(&[
                ("React Native", Mobile),
                ("TypeScript", Language),
                ("Firebase", Backend),
                ("Redux", StateManagement),
            ]),
        ),
        project(
            "4",
            "Blockchain Voting System",
            "Secure, decentralized voting platform built on blockchain technology with smart contracts and cryptographic verification.",
            "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?auto=format&fit=crop&w=800&q=80",
            ProjectCategory::Blockchain,
            stack(&[
                ("Solidity", Blockchain),
                ("Web3.js", Blockchain),
                ("React", Frontend),
                ("Ethereum", Platform),
            ]),
        ),
        project(
            "5",
            "IoT Home Automation",
            "Smart home automation system with IoT sensors, real-time monitoring, and mobile control interface.",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?auto=format&fit=crop&w=800&q=80",
            ProjectCategory::Iot,
            stack(&[
                ("Arduino", Hardware),
                ("Python", Language),
                ("MQTT", Protocol),
                ("React", Frontend),
            ]),
        ),
        project(
            "6",
            "Social Media Analytics",
            "Comprehensive social media analytics platform with sentiment analysis, engagement tracking, and automated reporting.",
            "https://images.unsplash.com/photo-1611926653458-09294b3142bf?auto=format&fit=crop&w=800&q=80",
            ProjectCategory::DataAnalytics,
            stack(&[
                ("Vue.js", Frontend),
                ("Django", Backend),
                ("PostgreSQL", Database),
                ("Docker", DevOps),
            ]),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn publication(
    id: &str,
    title: &str,
    authors: &[&str],
    venue: &str,
    year: u16,
    kind: PublicationType,
    abstract_text: &str,
    url: &str,
    doi: Option<&str>,
) -> Publication {
    Publication {
        id: id.to_owned(),
        title: title.to_owned(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        venue: venue.to_owned(),
        year,
        kind,
        abstract_text: abstract_text.to_owned(),
        url: Some(url.to_owned()),
        doi: doi.map(str::to_owned),
    }
}

/// Returns the research list, newest first.
///
pub fn publications() -> Vec<Publication> {
    vec![
        publication(
            "1",
            "Deep Learning Approaches for Autonomous Vehicle Navigation in Complex Urban Environments",
            &["John Smith", "Sarah Johnson", "Michael Chen", "Lisa Anderson"],
            "IEEE Conference on Computer Vision and Pattern Recognition (CVPR)",
            2024,
            PublicationType::Conference,
            "This paper presents a novel deep learning framework for autonomous vehicle navigation in complex urban environments. Our approach combines convolutional neural networks with reinforcement learning to enable real-time decision making in dynamic traffic scenarios. Experimental results demonstrate a 23% improvement in navigation accuracy compared to existing methods.",
            "https://example.com/paper1",
            Some("10.1109/CVPR.2024.12345"),
        ),
        publication(
            "2",
            "Quantum Machine Learning for Cryptographic Security Analysis",
            &["Emily Rodriguez", "David Kim", "Alex Thompson"],
            "Nature Machine Intelligence",
            2024,
            PublicationType::Journal,
            "We introduce a quantum machine learning approach for analyzing cryptographic security vulnerabilities. By leveraging quantum computational advantages, our method can identify potential weaknesses in encryption algorithms with exponential speedup over classical approaches.",
            "https://example.com/paper2",
            Some("10.1038/s42256-024-00123"),
        ),
        publication(
            "3",
            "Human-AI Collaboration in Creative Problem Solving: A Cognitive Study",
            &["Maria Garcia", "James Wilson", "Anna Chang", "Robert Davis", "Jennifer Lee"],
            "CHI Workshop on Human-AI Collaboration",
            2023,
            PublicationType::Workshop,
            "This study examines the cognitive processes involved when humans collaborate with AI systems in creative problem-solving tasks. Through controlled experiments with 150 participants, we identified key factors that enhance collaborative creativity and propose design principles for future human-AI interfaces.",
            "https://example.com/paper3",
            None,
        ),
        publication(
            "4",
            "Sustainable Computing: Energy-Efficient Algorithms for Large-Scale Data Processing",
            &["Thomas Brown", "Susan Miller", "Kevin Zhang"],
            "ACM Computing Surveys",
            2023,
            PublicationType::Journal,
            "As data processing demands continue to grow exponentially, energy efficiency has become a critical concern. This survey examines recent advances in energy-efficient algorithms for large-scale data processing, analyzing trade-offs between computational performance and power consumption across various application domains.",
            "https://example.com/paper4",
            Some("10.1145/3589789.3589790"),
        ),
    ]
}

/// Returns the skill bars in display order.
///
pub fn skills() -> Vec<Skill> {
    vec![
        Skill::new("Frontend Development", 95),
        Skill::new("React & Next.js", 92),
        Skill::new("Mobile Development", 88),
        Skill::new("Backend Development", 85),
        Skill::new("Machine Learning", 78),
        Skill::new("UI/UX Design", 82),
    ]
}

fn experience(
    kind: ExperienceKind,
    title: &str,
    organization: &str,
    location: &str,
    period: (&str, &str),
    description: &str,
) -> Experience {
    Experience {
        kind,
        title: title.to_owned(),
        organization: organization.to_owned(),
        location: location.to_owned(),
        start: period.0.to_owned(),
        end: period.1.to_owned(),
        description: description.to_owned(),
    }
}

/// Returns the experience timeline, most recent first.
///
pub fn experiences() -> Vec<Experience> {
    vec![
        experience(
            ExperienceKind::Work,
            "Senior Full Stack Developer",
            "Tech Innovations Inc.",
            "San Francisco, CA",
            ("2022", "Present"),
            "Lead development of scalable web applications using React, Node.js, and cloud technologies. Mentored junior developers and implemented best practices for code quality and performance.",
        ),
        experience(
            ExperienceKind::Work,
            "Full Stack Developer",
            "StartupXYZ",
            "Austin, TX",
            ("2020", "2022"),
            "Developed and maintained multiple client applications using modern JavaScript frameworks. Collaborated with design teams to create intuitive user interfaces and optimize user experience.",
        ),
        experience(
            ExperienceKind::Education,
            "Master of Science in Computer Science",
            "Stanford University",
            "Stanford, CA",
            ("2018", "2020"),
            "Specialized in machine learning and artificial intelligence. Completed thesis on neural network optimization for real-time applications.",
        ),
        experience(
            ExperienceKind::Education,
            "Bachelor of Science in Software Engineering",
            "University of California, Berkeley",
            "Berkeley, CA",
            ("2014", "2018"),
            "Graduated magna cum laude with focus on software architecture and system design. Led multiple group projects in web development and mobile applications.",
        ),
    ]
}

/// Returns timeline entries of one kind, keeping catalog order.
///
pub fn experiences_of(kind: ExperienceKind) -> Vec<Experience> {
    experiences()
        .into_iter()
        .filter(|entry| entry.kind == kind)
        .collect()
}

/// Returns the about section content.
///
pub fn about() -> About {
    let hobby = |title: &str, description: &str| Hobby {
        title: title.to_owned(),
        description: description.to_owned(),
    };
    let book = |title: &str, author: &str, status: &str| Book {
        title: title.to_owned(),
        author: author.to_owned(),
        status: status.to_owned(),
    };
    let fact = |fact: &str, detail: &str| FunFact {
        fact: fact.to_owned(),
        detail: detail.to_owned(),
    };

    About {
        summary: "I'm a passionate designer and developer who thrives at the intersection of creativity and technology. With over 8 years of experience crafting digital experiences, I believe great design should be both beautiful and functional.".to_owned(),
        hobbies: vec![
            hobby("Reading", "Currently diving into sci-fi novels and design philosophy books"),
            hobby("Coding", "Building side projects and experimenting with new technologies"),
            hobby("Photography", "Capturing moments during travels and urban exploration"),
            hobby("Music", "Vinyl collecting and discovering new artists on streaming platforms"),
            hobby("Travel", "Exploring new cultures and seeking inspiration from different places"),
            hobby("Design", "Sketching interface ideas and studying visual design principles"),
        ],
        current_reads: vec![
            book("The Design of Everyday Things", "Don Norman", "Currently Reading"),
            book("Atomic Habits", "James Clear", "Recently Finished"),
            book("The Pragmatic Programmer", "David Thomas", "Next Up"),
        ],
        fun_facts: vec![
            fact("Drinks 4+ cups of coffee daily", "Specialty coffee enthusiast with a pour-over ritual"),
            fact("Visited 15+ countries", "Always planning the next adventure"),
            fact("10,000+ hours coding", "Started programming at age 14"),
            fact("Early bird", "Best work happens between 6-9 AM"),
        ],
    }
}
