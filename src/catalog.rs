use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "amount")]
pub enum Price {
    Free,
    Paid(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Free => write!(f, "Free"),
            Price::Paid(amount) => write!(f, "{amount}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoResource {
    pub title: String,
    pub provider: String,
    pub instructor: String,
    pub duration: String,
    pub rating: f32,
    pub price: Price,
    pub url: String,
    pub description: String,
}

/// A recommendable training track.
///
/// `required_skills` holds lowercase tokens with duplicates removed, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDefinition {
    pub name: String,
    pub required_skills: Vec<String>,
    pub duration: String,
    pub video_resources: Vec<VideoResource>,
}

impl CourseDefinition {
    pub fn new(name: &str, skills: &[&str], duration: &str) -> Self {
        let mut required_skills: Vec<String> = Vec::with_capacity(skills.len());
        for skill in skills {
            let token = skill.to_lowercase();
            if !required_skills.contains(&token) {
                required_skills.push(token);
            }
        }

        Self {
            name: name.to_string(),
            required_skills,
            duration: duration.to_string(),
            video_resources: Vec::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_video(
        mut self,
        title: &str,
        provider: &str,
        instructor: &str,
        duration: &str,
        rating: f32,
        price: Price,
        url: &str,
        description: &str,
    ) -> Self {
        self.video_resources.push(VideoResource {
            title: title.to_string(),
            provider: provider.to_string(),
            instructor: instructor.to_string(),
            duration: duration.to_string(),
            rating,
            price,
            url: url.to_string(),
            description: description.to_string(),
        });
        self
    }
}

pub fn default_catalog() -> Vec<CourseDefinition> {
    vec![
        CourseDefinition::new(
            "MERN Stack",
            &["javascript", "mongodb", "express", "react", "node", "node.js", "mongo"],
            "8 hours",
        )
        .with_video(
            "React.js Complete Course 2024",
            "Udemy",
            "Max Schwarzmüller",
            "44 hours",
            4.7,
            Price::Paid("$19.99".to_string()),
            "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
            "Learn React.js from scratch with hooks, context, and Redux",
        )
        .with_video(
            "Node.js and Express.js - Full Course",
            "freeCodeCamp",
            "John Smilga",
            "8 hours",
            4.8,
            Price::Free,
            "https://www.youtube.com/watch?v=Oe421EPjeBE",
            "Complete Node.js and Express.js tutorial for beginners",
        )
        .with_video(
            "MongoDB Complete Course",
            "YouTube",
            "The Net Ninja",
            "3 hours",
            4.9,
            Price::Free,
            "https://www.youtube.com/watch?v=pWbMrx5rVBE",
            "Learn MongoDB from basics to advanced concepts",
        ),
        CourseDefinition::new(
            "Java Developer",
            &["java", "spring", "spring boot", "spring framework"],
            "6 hours",
        )
        .with_video(
            "Java Programming Masterclass",
            "Udemy",
            "Tim Buchalka",
            "80 hours",
            4.6,
            Price::Paid("$24.99".to_string()),
            "https://www.udemy.com/course/java-the-complete-java-developer-course/",
            "Complete Java programming course with practical projects",
        )
        .with_video(
            "Spring Boot Full Course",
            "Amigoscode",
            "Nelson Djalo",
            "6 hours",
            4.8,
            Price::Free,
            "https://www.youtube.com/watch?v=9SGDpanrc8U",
            "Learn Spring Boot from scratch with real-world projects",
        )
        .with_video(
            "Java Spring Framework",
            "YouTube",
            "Programming with Mosh",
            "4 hours",
            4.7,
            Price::Free,
            "https://www.youtube.com/watch?v=9SGDpanrc8U",
            "Complete Spring Framework tutorial for beginners",
        ),
        CourseDefinition::new(
            "Python Developer",
            &["python", "flask", "django", "py"],
            "5 hours",
        )
        .with_video(
            "Python for Everybody",
            "Coursera",
            "Charles Severance",
            "32 hours",
            4.8,
            Price::Free,
            "https://www.coursera.org/specializations/python",
            "Complete Python programming specialization",
        )
        .with_video(
            "Django Full Course",
            "YouTube",
            "Dennis Ivy",
            "5 hours",
            4.9,
            Price::Free,
            "https://www.youtube.com/watch?v=JT80XhUJ1Z4",
            "Learn Django web framework from scratch",
        )
        .with_video(
            "Flask Web Development",
            "freeCodeCamp",
            "Tech With Tim",
            "3 hours",
            4.7,
            Price::Free,
            "https://www.youtube.com/watch?v=oA8brF3w5XQ",
            "Build web applications with Flask framework",
        ),
        CourseDefinition::new(
            "Data Analytics",
            &[
                "python",
                "sql",
                "pandas",
                "excel",
                "numpy",
                "data science",
                "data analysis",
                "analytics",
            ],
            "7 hours",
        )
        .with_video(
            "Data Science Bootcamp",
            "Udemy",
            "Jose Portilla",
            "44 hours",
            4.6,
            Price::Paid("$29.99".to_string()),
            "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
            "Complete data science course with Python",
        )
        .with_video(
            "SQL for Data Science",
            "DataCamp",
            "Multiple Instructors",
            "20 hours",
            4.8,
            Price::Paid("$39/month".to_string()),
            "https://www.datacamp.com/tracks/data-science-with-python",
            "Learn SQL for data analysis and manipulation",
        )
        .with_video(
            "Pandas Tutorial",
            "YouTube",
            "Corey Schafer",
            "2 hours",
            4.9,
            Price::Free,
            "https://www.youtube.com/watch?v=daefaLgNkw0",
            "Complete Pandas tutorial for data analysis",
        ),
    ]
}

pub fn find_course<'a>(catalog: &'a [CourseDefinition], name: &str) -> Option<&'a CourseDefinition> {
    catalog.iter().find(|course| course.name == name)
}

/// Quiz question banks are keyed by exact course name. Sentinels and
/// near-miss spellings have no bank.
pub fn quiz_bank_key<'a>(catalog: &'a [CourseDefinition], course_name: &str) -> Option<&'a str> {
    find_course(catalog, course_name).map(|course| course.name.as_str())
}
