//! Static project catalogue behind `/projects` and `/project/:project_id`.

/// A run of paragraph text, optionally a collectable word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Text(&'static str),
    Reward {
        id: &'static str,
        value: i64,
        text: &'static str,
    },
}

use Segment::{Reward, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubProject {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectData {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub paragraphs: &'static [&'static [Segment]],
    pub tech: &'static [&'static str],
    pub github: Option<&'static str>,
    pub devpost: Option<&'static str>,
    pub sub_projects: &'static [SubProject],
}

/// Card shown in the project listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCardData {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSection {
    pub title: &'static str,
    pub shaded: bool,
    pub cards: &'static [ProjectCardData],
}

pub fn find_project(slug: &str) -> Option<&'static ProjectData> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

pub fn detail_link(slug: &str) -> String {
    format!("/project/{}", slug)
}

pub static PROJECTS: &[ProjectData] = &[
    ProjectData {
        slug: "alzheimer-camera",
        title: "Remember Me",
        tagline: "'helping loved ones when memory falters'",
        paragraphs: &[
            &[
                Text("Remember Me gives ones family a "),
                Reward { id: "project-calm-affordable", value: 1500, text: "calm and affordable way" },
                Text(" to help loved ones when their "),
                Reward { id: "project-memory-falters", value: 1800, text: "memory falters" },
                Text(". By pairing a friendly camera with a mobile app, we turn everyday moments into "),
                Reward { id: "project-reassuring-reminders", value: 1600, text: "reassuring reminders" },
                Text(" so families can stay connected, even when names are hard to recall."),
            ],
            &[
                Text("The camera easily attaches to clothing and whenever you pass by someone you've previously met, it "),
                Reward { id: "project-announces-name", value: 2000, text: "announces the name" },
                Text(" of that person, their relationship with you, and a short note."),
            ],
            &[
                Text("Built during "),
                Reward { id: "project-stormhacks", value: 1200, text: "Stormhacks 2025" },
                Text(", this project uses Amazon Rekognition for "),
                Reward { id: "project-facial-recognition", value: 2200, text: "facial recognition" },
                Text(", DynamoDB for profile storage, and ElevenLabs for natural "),
                Reward { id: "project-text-to-speech", value: 1400, text: "text-to-speech" },
                Text(" announcements."),
            ],
        ],
        tech: &["Python", "Flask", "OpenCV", "Amazon Rekognition", "DynamoDB", "S3", "ElevenLabs", "React Native", "Expo"],
        github: Some("https://github.com/LeCruitUsPls/AlzheimerCamera"),
        devpost: Some("https://devpost.com/software/remember-me-e6pyuv"),
        sub_projects: &[],
    },
    ProjectData {
        slug: "get-swole",
        title: "Get Swole",
        tagline: "'an absolute need when gymming'",
        paragraphs: &[
            &[
                Text("Get Swole is a fullstack web application that boosts "),
                Reward { id: "swole-gym-performance", value: 1600, text: "gym performance" },
                Text(" by analyzing your form in "),
                Reward { id: "swole-real-time", value: 1800, text: "real-time" },
                Text(". It leverages MediaPipe for "),
                Reward { id: "swole-pose-detection", value: 2000, text: "pose landmark detection" },
                Text(" and a custom machine learning model to verify full exercise repetitions."),
            ],
            &[
                Text("The application uses advanced "),
                Reward { id: "swole-computer-vision", value: 2200, text: "computer vision" },
                Text(" to extract pose landmarks from your camera feed, calculating "),
                Reward { id: "swole-joint-angles", value: 1500, text: "joint angles" },
                Text(" and movement patterns to ensure proper form during exercises."),
            ],
            &[
                Text("By combining real-time pose estimation with a separately trained model, Get Swole provides "),
                Reward { id: "swole-instant-feedback", value: 1700, text: "instant feedback" },
                Text(" on your workout technique, helping you maximize results while minimizing "),
                Reward { id: "swole-injury-risk", value: 1400, text: "injury risk" },
                Text("."),
            ],
        ],
        tech: &["Python", "MediaPipe", "React", "Node.js", "Machine Learning", "Computer Vision"],
        github: Some("https://github.com/aaronrhim/HackathonCS6"),
        devpost: None,
        sub_projects: &[],
    },
    ProjectData {
        slug: "website-portfolio",
        title: "Website Portfolio",
        tagline: "'beautiful, aesthetic, and reflective'",
        paragraphs: &[
            &[
                Text("This portfolio website features a unique "),
                Reward { id: "portfolio-gamified", value: 1800, text: "gamified experience" },
                Text(" where visitors can click highlighted words throughout the site to earn "),
                Reward { id: "portfolio-virtual-currency", value: 1600, text: "virtual currency" },
                Text(". Each interaction is tracked persistently using "),
                Reward { id: "portfolio-cloud-storage", value: 2000, text: "local storage" },
                Text(", ensuring progress is maintained across sessions."),
            ],
            &[
                Text("The site showcases an immersive "),
                Reward { id: "portfolio-mars-parallax", value: 2200, text: "Mars parallax background" },
                Text(" with animated elements including a roving "),
                Reward { id: "portfolio-mars-rover", value: 1500, text: "Mars rover" },
                Text(", rotating Earth, distant mountains, and a futuristic Mars colony. The rover autonomously travels across the terrain, reversing direction at screen edges while maintaining smooth animations."),
            ],
            &[
                Text("Built with "),
                Reward { id: "portfolio-modern-tech", value: 1700, text: "modern web technologies" },
                Text(", the portfolio demonstrates Rust compiled to WebAssembly, fine-grained reactive UI, and "),
                Reward { id: "portfolio-fullstack", value: 1900, text: "full-stack capabilities" },
                Text(" with an embedded SQLite ledger for persistent data storage."),
            ],
        ],
        tech: &["Rust", "Leptos", "WebAssembly", "Tauri", "SQLite"],
        github: Some("https://github.com/aaronrhim/NewPortfolio"),
        devpost: None,
        sub_projects: &[],
    },
    ProjectData {
        slug: "rover",
        title: "Rover",
        tagline: "'so cool'",
        paragraphs: &[
            &[
                Text("The UBC Rover team's "),
                Reward { id: "rover-rl-framework", value: 2000, text: "reinforcement learning framework" },
                Text(" designed to push the boundaries of "),
                Reward { id: "rover-autonomous-navigation", value: 1800, text: "autonomous navigation" },
                Text(" and intelligent decision-making in challenging terrain. This project serves as the foundation for teaching our rover to "),
                Reward { id: "rover-learn-environment", value: 1600, text: "learn from its environment" },
                Text(" and make complex decisions in real-time."),
            ],
            &[
                Text("The framework integrates with the rover's "),
                Reward { id: "rover-ros-systems", value: 1500, text: "ROS-based control systems" },
                Text(", enabling seamless deployment of trained models directly onto the physical hardware. Through iterative training in both simulated and real-world environments, the rover continuously improves its ability to "),
                Reward { id: "rover-navigate-obstacles", value: 1700, text: "navigate obstacles" },
                Text(", optimize path planning, and adapt to unexpected conditions."),
            ],
            &[
                Text("As part of the broader UBC Rover initiative, this project coordinates "),
                Reward { id: "rover-specialized-components", value: 1900, text: "multiple specialized components" },
                Text(" that each tackle different aspects of rover intelligence, from "),
                Reward { id: "rover-low-level-control", value: 1400, text: "low-level control systems" },
                Text(" to high-level mission planning. The "),
                Reward { id: "rover-modular-architecture", value: 2100, text: "modular architecture" },
                Text(" allows individual components to be developed, tested, and integrated independently while maintaining system-wide coherence."),
            ],
        ],
        tech: &["Python", "Reinforcement Learning", "ROS", "PyTorch", "OpenAI Gym", "Robotics"],
        github: Some("https://github.com/UBC-Snowbots/LearnFlake"),
        devpost: None,
        sub_projects: &[SubProject {
            title: "URDF to MJCF Converter",
            description: "A robust tool for converting URDF robot models to MuJoCo XML format. Built to address incompatibilities in existing converters, this utility enables seamless integration of robot models into MuJoCo physics simulation environments for reinforcement learning training.",
            tech: &["Python", "URDF", "MuJoCo", "XML Processing"],
            github: "https://github.com/aaronrhim/URDF-to-MJCF-Converter",
        }],
    },
    ProjectData {
        slug: "lecruiter",
        title: "LeCruiter",
        tagline: "'LeBron everything'",
        paragraphs: &[
            &[Text("LeCruiter is an AI-powered recruiter that streamlines the hiring process using advanced language models and automation. This system analyzes resumes, conducts initial candidate screenings, and matches applicants with job requirements efficiently.")],
            &[Text("Built during a GenAI hackathon, LeCruiter leverages natural language processing to understand job descriptions and candidate profiles, providing intelligent recommendations and insights to hiring managers.")],
            &[Text("The platform automates repetitive recruitment tasks while maintaining a human touch, allowing recruiters to focus on meaningful candidate interactions and strategic hiring decisions.")],
        ],
        tech: &["Python", "Natural Language Processing", "AI/ML", "LangChain", "OpenAI"],
        github: Some("https://github.com/R0yZh3ng/CIC-GenAI-Hackathon"),
        devpost: None,
        sub_projects: &[],
    },
    ProjectData {
        slug: "fact",
        title: "F.A.C.T",
        tagline: "'try on clothes with AI'",
        paragraphs: &[
            &[Text("F.A.C.T (Fashion App Computer Try-on) is an innovative fashion application that uses computer vision, MediaPipe, and real-time pose detection to virtually map clothing onto your body using just a webcam.")],
            &[Text("The application employs the same advanced computer vision principles as Get Swole, utilizing MediaPipe for precise body landmark detection and tracking. This enables accurate clothing overlay that moves naturally with your body movements.")],
            &[Text("By combining pose estimation with image processing, F.A.C.T creates an immersive virtual try-on experience, allowing users to see how different outfits look on them without physical changing, revolutionizing online shopping and fashion exploration.")],
        ],
        tech: &["Python", "MediaPipe", "Computer Vision", "OpenCV", "Fashion Tech"],
        github: Some("https://github.com/aaronrhim/F.A.C.T"),
        devpost: None,
        sub_projects: &[],
    },
    ProjectData {
        slug: "arrc",
        title: "ARRC",
        tagline: "'Aerial Robotics and Rocketry Club'",
        paragraphs: &[
            &[Text("ARRC is the UBC Aerial Robotics and Rocketry Club's autonomous unmanned aerial system (UAS) project for the 2025 UAS Competition. This comprehensive system implements advanced flight control, computer vision, and mission planning capabilities.")],
            &[Text("The project integrates multiple subsystems including autonomous navigation, object detection and tracking, precision landing, and payload delivery mechanisms. Using ROS for system coordination, the drone can execute complex mission profiles with minimal human intervention.")],
            &[Text("Developed by a multidisciplinary team, ARRC pushes the boundaries of autonomous flight, incorporating cutting-edge algorithms for SLAM, path planning, and real-time decision making in dynamic environments.")],
        ],
        tech: &["Python", "ROS", "Computer Vision", "Autonomous Systems", "ArduPilot"],
        github: Some("https://github.com/UBCOAerospaceClub/UAS-Competition-2025-Task-1"),
        devpost: None,
        sub_projects: &[
            SubProject {
                title: "Denoiser",
                description: "Machine learning model for removing noise from sensor data and images, significantly improving signal quality for autonomous systems. The denoiser preprocesses camera feeds and sensor readings, enabling more accurate object detection and navigation.",
                tech: &["Python", "TensorFlow", "Deep Learning", "Signal Processing"],
                github: "https://colab.research.google.com/drive/16mnHpR647QeGAPwdqLImC3z9wOWOLcxw",
            },
            SubProject {
                title: "ZeroMQ Integration",
                description: "High-performance asynchronous messaging library implementation for distributed systems communication. ZeroMQ enables efficient, low-latency message passing between drone subsystems, providing real-time communication critical for autonomous flight operations.",
                tech: &["Python", "ZeroMQ", "Distributed Systems", "Networking"],
                github: "https://github.com/UBCOAerospaceClub/UAS-Competition-2025-Task-1/tree/zeromq",
            },
        ],
    },
    ProjectData {
        slug: "image-classification",
        title: "Image Classification",
        tagline: "'my first project'",
        paragraphs: &[
            &[Text("This deep learning project implements a robust image classification system using convolutional neural networks. The model is trained on diverse datasets to accurately recognize and categorize objects across multiple classes.")],
            &[Text("The classifier employs transfer learning techniques, building upon pre-trained models like ResNet and VGG, then fine-tuning them on specific datasets to achieve high accuracy while reducing training time and computational requirements.")],
            &[Text("With applications in autonomous systems, quality control, and content moderation, this project demonstrates the power of modern computer vision techniques in solving real-world classification problems.")],
        ],
        tech: &["Python", "TensorFlow", "Keras", "Deep Learning", "Computer Vision"],
        github: Some("https://github.com/aaronrhim/image-classification"),
        devpost: None,
        sub_projects: &[],
    },
    ProjectData {
        slug: "custom-cnn",
        title: "Custom CNN Model",
        tagline: "'my second project'",
        paragraphs: &[
            &[Text("This project features a custom-built convolutional neural network architecture designed from scratch for specialized image processing tasks. Unlike using pre-trained models, this CNN is architected specifically for target use cases.")],
            &[Text("The model implements various CNN building blocks including convolutional layers with custom kernel sizes, pooling operations, batch normalization, dropout for regularization, and fully connected layers for classification.")],
            &[Text("By building the architecture from the ground up, this project provides deep insights into how CNNs learn hierarchical features, from low-level edges and textures to high-level semantic representations.")],
        ],
        tech: &["Python", "PyTorch", "Neural Networks", "Deep Learning", "NumPy"],
        github: Some("https://github.com/aaronrhim/custom-CNN"),
        devpost: None,
        sub_projects: &[],
    },
    ProjectData {
        slug: "stock-predictor",
        title: "Stock Market Predictor",
        tagline: "'invest wisely'",
        paragraphs: &[
            &[Text("This machine learning project analyzes historical stock market data to predict future price trends using advanced time series analysis and neural network architectures. The system processes multiple financial indicators and market signals.")],
            &[Text("The predictor employs LSTM (Long Short-Term Memory) networks specifically designed for sequential data, capturing temporal dependencies and patterns in stock price movements. It incorporates technical indicators like moving averages, RSI, and MACD.")],
            &[Text("While financial markets are inherently unpredictable, this project demonstrates the application of machine learning to quantitative finance, providing insights into trend analysis, risk assessment, and algorithmic trading strategies.")],
        ],
        tech: &["Python", "TensorFlow", "LSTM", "Time Series Analysis", "Pandas"],
        github: Some("https://github.com/aaronrhim/Stock-Market-Prediction"),
        devpost: None,
        sub_projects: &[],
    },
    ProjectData {
        slug: "gmail-extension",
        title: "Gmail Extension",
        tagline: "'stupid gmail extension got no hair' - Marcus",
        paragraphs: &[
            &[Text("This Chrome extension enhances Gmail functionality with custom features designed to improve email management and productivity. The extension integrates seamlessly with Gmail's interface, adding new capabilities without disrupting the user experience.")],
            &[Text("Features include automated email organization, quick reply templates, enhanced search capabilities, and custom keyboard shortcuts. The extension uses Gmail's API and Chrome's extension APIs to provide powerful functionality.")],
            &[Text("Built with vanilla JavaScript and modern web technologies, this project demonstrates proficiency in browser extension development, DOM manipulation, and working with external APIs in a sandboxed environment.")],
        ],
        tech: &["JavaScript", "Chrome Extension API", "Gmail API", "HTML/CSS"],
        github: Some("https://github.com/aaronrhim/stupid-gmail-extension"),
        devpost: None,
        sub_projects: &[],
    },
    ProjectData {
        slug: "docker-pipeline",
        title: "Docker Pipeline CLI",
        tagline: "'practicing my devops skills :)'",
        paragraphs: &[
            &[Text("This command-line tool automates Docker workflows and container management, streamlining development and deployment processes. The CLI provides intuitive commands for common Docker operations and complex multi-container orchestration.")],
            &[Text("The tool includes features for automated image building, container lifecycle management, environment configuration, log aggregation, and deployment automation. It simplifies repetitive Docker commands into single, memorable CLI instructions.")],
            &[Text("Perfect for DevOps workflows, this pipeline tool integrates with CI/CD systems and supports custom scripts, making containerized application development more efficient and reducing the likelihood of deployment errors.")],
        ],
        tech: &["Python", "Docker", "CLI Development", "DevOps", "Bash"],
        github: Some("https://github.com/aaronrhim/personal-cli"),
        devpost: None,
        sub_projects: &[],
    },
    ProjectData {
        slug: "old-website",
        title: "Old Portfolio Website",
        tagline: "'took me 40 hours to deploy'",
        paragraphs: &[
            &[Text("This is my previous personal portfolio website, showcasing earlier projects and demonstrating web development skills with traditional HTML, CSS, and JavaScript. The site served as a digital resume and project showcase before the current Mars-themed portfolio.")],
            &[Text("The website featured a clean, professional design with sections for projects, skills, experience, and contact information. It was built with responsive design principles to ensure compatibility across devices and browsers.")],
            &[Text("While simpler than the current portfolio, this site represents an important step in my web development journey, showcasing fundamental front-end skills and design sensibilities that have evolved into more complex, interactive experiences.")],
        ],
        tech: &["HTML", "CSS", "JavaScript", "GitHub Pages", "Responsive Design"],
        github: Some("https://github.com/aaronrhim/aaronrhim.github.io"),
        devpost: None,
        sub_projects: &[],
    },
];

/// Sections of the `/projects` listing, in display order.
pub static PROJECT_SECTIONS: &[ProjectSection] = &[
    ProjectSection {
        title: "Hackathons",
        shaded: false,
        cards: &[
            ProjectCardData {
                title: "Remember Me",
                description: "An Alzheimer's assistance camera that uses facial recognition to help loved ones remember people they meet. Built with AWS Rekognition, DynamoDB, and ElevenLabs TTS.",
                tags: &["Python", "AWS", "Cloud Storage", "Hardware", "React Native"],
                link: Some("alzheimer-camera"),
            },
            ProjectCardData {
                title: "Get Swole",
                description: "A fullstack web application that boosts gym performance by analyzing your form in real-time using MediaPipe for pose detection and custom ML models for rep verification.",
                tags: &["Python", "MediaPipe", "React", "Machine Learning"],
                link: Some("get-swole"),
            },
            ProjectCardData {
                title: "LeCruiter",
                description: "AI-powered recruiter that streamlines the hiring process using advanced language models and automation.",
                tags: &["Chatbot", "Python", "AWS Bedrock", "AWS Lambda"],
                link: Some("lecruiter"),
            },
            ProjectCardData {
                title: "F.A.C.T",
                description: "Fashion app that uses computer vision, MediaPipe, and maps clothing onto your body with a simple webcam.",
                tags: &["Python", "MediaPipe", "Computer Vision", "Fashion Tech", "Web Scraping"],
                link: Some("fact"),
            },
        ],
    },
    ProjectSection {
        title: "Engineering Design Teams",
        shaded: true,
        cards: &[
            ProjectCardData {
                title: "Rover",
                description: "UBC Rover team's reinforcement learning framework for autonomous navigation and decision-making. A collection of interconnected projects advancing rover capabilities through machine learning.",
                tags: &["Python", "Reinforcement Learning", "ROS2", "Google Mujoco", "Docker"],
                link: Some("rover"),
            },
            ProjectCardData {
                title: "ARRC",
                description: "UBC Aerial Robotics and Rocketry Club's autonomous drone competition project for UAS Competition 2025, implementing advanced flight control and mission planning.",
                tags: &["Python", "Telemetry", "Computer Vision", "Docker"],
                link: Some("arrc"),
            },
        ],
    },
    ProjectSection {
        title: "Software Dev Projects",
        shaded: true,
        cards: &[
            ProjectCardData {
                title: "Website Portfolio",
                description: "My full-stack portfolio site, written in Rust with Leptos and Tauri.",
                tags: &["Rust", "Leptos", "WebAssembly", "SQLite"],
                link: Some("website-portfolio"),
            },
            ProjectCardData {
                title: "Old Website",
                description: "Previous personal portfolio website showcasing earlier projects and web development skills.",
                tags: &["HTML", "CSS", "JavaScript", "Jekyll"],
                link: Some("old-website"),
            },
            ProjectCardData {
                title: "Gmail Extension",
                description: "Chrome extension that enhances Gmail functionality with custom features for improved email management and productivity.",
                tags: &["JavaScript", "Chrome API", "Web Extension", "Gmail"],
                link: Some("gmail-extension"),
            },
            ProjectCardData {
                title: "Docker Pipeline",
                description: "Command-line tool for automating Docker workflows and container management, streamlining development and deployment processes.",
                tags: &["Docker", "CLI", "DevOps", "Automation"],
                link: Some("docker-pipeline"),
            },
        ],
    },
    ProjectSection {
        title: "AI Projects",
        shaded: false,
        cards: &[
            ProjectCardData {
                title: "Image Classification",
                description: "Deep learning model for classifying images using convolutional neural networks, trained on diverse datasets for accurate object recognition.",
                tags: &["Python", "TensorFlow", "Deep Learning", "ResNet"],
                link: Some("image-classification"),
            },
            ProjectCardData {
                title: "Custom CNN Model",
                description: "Custom-built convolutional neural network architecture designed from scratch for specialized image processing tasks.",
                tags: &["Python", "PyTorch", "Neural Networks", "Deep Learning", "Keras"],
                link: Some("custom-cnn"),
            },
            ProjectCardData {
                title: "Stock Market Predictor",
                description: "Machine learning model that analyzes historical stock data to predict future market trends using time series analysis.",
                tags: &["Python", "Recurrent Neural Networks", "LSTM"],
                link: Some("stock-predictor"),
            },
        ],
    },
];

/// Teaser cards on the home page. They have no detail pages.
pub static FEATURED: &[ProjectCardData] = &[
    ProjectCardData {
        title: "E-Commerce Platform",
        description: "A modern e-commerce solution built with React and Node.js, featuring real-time inventory management and seamless checkout experience.",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        link: None,
    },
    ProjectCardData {
        title: "Portfolio Website",
        description: "Interactive portfolio showcasing creative projects with smooth animations and engaging user experience.",
        tags: &["Rust", "Leptos", "CSS Animations"],
        link: None,
    },
    ProjectCardData {
        title: "Task Management App",
        description: "Collaborative task manager with real-time updates, team collaboration features, and intuitive drag-and-drop interface.",
        tags: &["TypeScript", "Firebase", "React DnD"],
        link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn rewards(project: &ProjectData) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        project.paragraphs.iter().flat_map(|p| p.iter()).filter_map(|s| match s {
            Reward { id, value, .. } => Some((*id, *value)),
            Text(_) => None,
        })
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find_project("rover").map(|p| p.title), Some("Rover"));
        assert!(find_project("does-not-exist").is_none());
        assert!(find_project("").is_none());
    }

    #[test]
    fn test_slugs_unique() {
        let slugs: HashSet<_> = PROJECTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), PROJECTS.len());
    }

    #[test]
    fn test_reward_ids_unique_and_positive() {
        let mut seen = HashSet::new();
        for project in PROJECTS {
            for (id, value) in rewards(project) {
                assert!(seen.insert(id), "duplicate reward id {}", id);
                assert!(value > 0 && value <= 10_000, "{} has value {}", id, value);
            }
        }
        assert_eq!(seen.len(), 26);
    }

    #[test]
    fn test_listing_links_resolve() {
        for section in PROJECT_SECTIONS {
            for card in section.cards {
                let slug = card.link.expect("listing cards link to a detail page");
                assert!(find_project(slug).is_some(), "{} has no detail page", slug);
            }
        }
        assert_eq!(detail_link("fact"), "/project/fact");
    }

    #[test]
    fn test_every_paragraph_has_text() {
        for project in PROJECTS {
            assert!(!project.paragraphs.is_empty(), "{}", project.slug);
            for paragraph in project.paragraphs {
                assert!(!paragraph.is_empty(), "{}", project.slug);
            }
        }
    }
}
