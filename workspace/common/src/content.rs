use crate::catalog::{
    Catalog, Citation, CitationRegistry, CoverageRow, Difficulty, ExpandableTopic, Headline,
    ImageCatalog, ResourceEntry, SampleQuestion, SkillScoreEntry, SubtopicEntry, TopicCount,
    TopicDistributionEntry, TrendPoint,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn citation(
    title: &str,
    url: &str,
    content: &str,
    site_name: &str,
    source_content: &str,
) -> Citation {
    Citation {
        title: Some(title.to_string()),
        url: url.to_string(),
        content: content.to_string(),
        date: "Retrieved 2024".to_string(),
        site_name: site_name.to_string(),
        source_content: source_content.to_string(),
    }
}

fn citations() -> CitationRegistry {
    let mut registry = CitationRegistry::new();
    registry.insert(
        "1",
        citation(
            "Cognizant GenC Sample Aptitude Questions and Answers",
            "http://www.placementpreparation.io/cognizant-genc/aptitude/questions-and-answers/",
            "Comprehensive collection of Cognizant GenC aptitude questions covering quantitative aptitude, logical reasoning, and verbal ability sections with detailed solutions and explanations.",
            "Placement Preparation",
            "Sample questions for Cognizant GenC recruitment process including Time & Distance, Simple Interest, Percentages, Calendars, Numbers, Races, Permutations & Combinations, Probability, Work & Time, and other quantitative topics.",
        ),
    );
    registry.insert(
        "2",
        citation(
            "Cognizant Aptitude Questions | Aptitude Test For Cognizant",
            "https://cpt.hitbullseye.com/Cognizant-Aptitude-Questions.php",
            "Practice tests and aptitude questions specifically designed for Cognizant recruitment with focus on Quantitative, Verbal, Reasoning, and Data Interpretation sections.",
            "Hitbullseye",
            "Volumes, Coins/Values, Average Speed, Simplification, Numbers, Divisibility, Algebra, Clocks, Square Roots, and Price Reduction problems with multiple choice answers.",
        ),
    );
    registry.insert(
        "3",
        citation(
            "Cognizant Logical Reasoning Questions and Answers For Freshers",
            "https://www.freshersnow.com/cognizant-logical-reasoning-questions-and-answers/",
            "Detailed logical reasoning questions and answers for Cognizant placement preparation including syllogisms, odd one out, rules-based problems, analogies, and sequence arrangements.",
            "FreshersNow",
            "Statements and Conclusions, Classification problems, Rules-based numerical problems, Analogies, and Sequence/Arrangement questions with comprehensive explanations.",
        ),
    );
    registry.insert(
        "4",
        citation(
            "Cognizant GenC Logical Reasoning Questions 2025 | PrepInsta",
            "https://prepinsta.com/cognizant/logical-reasoning/",
            "Latest logical reasoning questions for Cognizant GenC 2025 recruitment including analogy, number series, coding/decoding, blood relations, syllogisms, and pattern recognition problems.",
            "PrepInsta",
            "Word/Relationship analogies, Number Series, Coding/Decoding, Blood Relations, Statement & Conclusion problems, Pattern Recognition, and Visual Reasoning questions.",
        ),
    );
    registry
}

fn images() -> ImageCatalog {
    ImageCatalog {
        banner: "https://static.placementpreparation.io/cdn-cgi/image/metadata=keep,quality=60,width=1440,height=500,f=auto,fit=cover/aptitude-images/aptitude/category/v2/webps/cts-banner.webp".to_string(),
        hitbullseye_logo: "https://s3service.hitbullseye.com/s3fs-public/Campus%20Placement%20Test%20Series%20(3).jpg?null".to_string(),
        hitbullseye_generic: "https://www.hitbullseye.com/images/img-lazy-temp.png".to_string(),
        freshers_now_logo: "https://www.freshersnow.com/wp-content/uploads/2017/11/freshersnow-logo.png".to_string(),
        freshers_now_questions: "https://www.freshersnow.com/wp-content/uploads/2019/03/Cognizant-Reasoning-Questions-and-Answers-696x357.png".to_string(),
        prep_insta_courses: "https://i.ytimg.com/vi/VIJZDU6XjVk/hqdefault.jpg".to_string(),
        prep_insta_logo: "https://files.prepinsta.com/wp-content/uploads/2024/11/V6YCLYSe-atul-image.png".to_string(),
    }
}

fn distribution(name: &str, questions: u32, percentage: u32, color: &str) -> TopicDistributionEntry {
    TopicDistributionEntry {
        name: name.to_string(),
        questions,
        percentage,
        color: color.to_string(),
    }
}

fn subtopic(topic: &str, questions: u32, difficulty: Difficulty) -> SubtopicEntry {
    SubtopicEntry {
        topic: topic.to_string(),
        questions,
        difficulty,
    }
}

fn skill(skill: &str, score: u8) -> SkillScoreEntry {
    SkillScoreEntry {
        skill: skill.to_string(),
        score,
    }
}

fn question(prompt: &str, options: &[&str], citation: &str) -> SampleQuestion {
    SampleQuestion {
        heading: "Sample Question:".to_string(),
        prompt: prompt.to_string(),
        options: strings(options),
        citation: citation.to_string(),
        ..Default::default()
    }
}

fn topic(key: &str, title: &str, sample: SampleQuestion) -> ExpandableTopic {
    ExpandableTopic {
        key: key.to_string(),
        title: title.to_string(),
        sample,
    }
}

fn coverage(topic: &str, questions: u32, difficulty: Difficulty, key_concepts: &str) -> CoverageRow {
    CoverageRow {
        topic: topic.to_string(),
        questions,
        difficulty,
        key_concepts: key_concepts.to_string(),
    }
}

fn quantitative_samples() -> Vec<ExpandableTopic> {
    vec![
        topic(
            "time-distance",
            "Time & Distance (8 Questions)",
            question(
                "A train 125 meters long passes a man running at 5 km/hr in the same direction in which the train crosses in 10 seconds. The speed of the train is:",
                &["(A) 50 km/hr", "(B) 54 km/hr", "(C) 55 km/hr", "(D) 60 km/hr"],
                "1",
            ),
        ),
        topic(
            "percentages",
            "Percentages (6 Questions)",
            question(
                "In an election between two candidates, one got 55% of the total valid votes and got 20% invalid votes. At the end of the day when the total number of votes were counted, the total number was found to be 7500. So what was the total number of valid votes that the winning candidate got?",
                &["(A) 2800", "(B) 3300", "(C) 3100", "(D) 2700"],
                "1",
            ),
        ),
        topic(
            "work-time",
            "Work & Time (7 Questions)",
            question(
                "X, Y and Z can do a piece of work in 20, 30 and 60 days respectively depending on their capacity of doing work. If X is assisted by Y and Z on every third day, then in how many days X will complete the work?",
                &["(A) 12 days", "(B) 15 days", "(C) 16 days", "(D) 18 days"],
                "1",
            ),
        ),
    ]
}

fn reasoning_samples() -> Vec<ExpandableTopic> {
    let syllogism = SampleQuestion {
        statements: strings(&[
            "All pens are pins.",
            "No tag is a pin.",
            "All papers are pens.",
        ]),
        conclusions: strings(&[
            "I. No pin is a tag",
            "II. All papers are pins",
            "III. All pins are definitely not tag",
        ]),
        ..question(
            "",
            &[
                "(A) Only I follows",
                "(B) Only II follows",
                "(C) Only II and III follow",
                "(D) All I, II and III follow",
            ],
            "3",
        )
    };

    vec![
        topic(
            "syllogisms",
            "Statements and Conclusions (Syllogisms) - 8 Questions",
            syllogism,
        ),
        topic(
            "coding",
            "Coding and Decoding - 6 Questions",
            question(
                "In a certain code GUEST is written as 53@$2 and MEAN is written as 6@4#. How is SAME written in that code?",
                &["(A) 4$6@", "(B) $46@", "(C) $36@", "(D) 5$6@"],
                "4",
            ),
        ),
        topic(
            "blood-relations",
            "Blood Relations - 5 Questions",
            question(
                "A is the son of C; C and Q are sisters; Z is the mother of Q and P is the son of Z. Which of the following statements is true?",
                &[
                    "(A) P is father of A",
                    "(B) P is brother of C",
                    "(C) A is son of Z",
                    "(D) Q is sister of A",
                ],
                "4",
            ),
        ),
    ]
}

fn verbal_samples() -> Vec<SampleQuestion> {
    vec![
        SampleQuestion {
            heading: "Sentence Completion:".to_string(),
            ..question(
                "In a press meet on the recent scam, the minister said, \"The buck stops here\". What did the minister convey by the statement?",
                &[
                    "(A) He wants all the money",
                    "(B) He will return the money",
                    "(C) He will assume final responsibility",
                    "(D) He will resist all enquiries",
                ],
                "1",
            )
        },
        SampleQuestion {
            heading: "Grammar:".to_string(),
            ..question(
                "Who ___________ was coming to see us this evening?",
                &["(A) you said", "(B) did you say", "(C) did you say that", "(D) had you"],
                "1",
            )
        },
        SampleQuestion {
            heading: "Vocabulary Matching:".to_string(),
            prompt: "Match the columns:".to_string(),
            columns: vec![
                strings(&["1. eradicate", "2. distort", "3. saturate", "4. utilize"]),
                strings(&[
                    "P) misrepresent",
                    "Q) soak completely",
                    "R) use",
                    "S) destroy utterly",
                ]),
            ],
            answer: Some("(A) 1:S, 2:P, 3:Q, 4:R".to_string()),
            citation: "1".to_string(),
            ..Default::default()
        },
    ]
}

fn resources(images: &ImageCatalog) -> Vec<ResourceEntry> {
    let entry = |name: &str, image: &str, image_alt: &str, description: &str, citation: &str| {
        ResourceEntry {
            name: name.to_string(),
            image: image.to_string(),
            image_alt: image_alt.to_string(),
            description: description.to_string(),
            citation: citation.to_string(),
        }
    };

    vec![
        entry(
            "Placement Preparation",
            &images.banner,
            "Placement Preparation Banner",
            "Comprehensive Cognizant GenC sample questions covering Aptitude, Programming, and company-specific resources.",
            "1",
        ),
        entry(
            "Hitbullseye",
            &images.hitbullseye_logo,
            "Hitbullseye Logo",
            "Practice tests for Cognizant aptitude questions with solutions, focusing on Quant, Verbal, Reasoning, and Data sections.",
            "2",
        ),
        entry(
            "FreshersNow",
            &images.freshers_now_logo,
            "FreshersNow Logo",
            "Specialized in Cognizant Logical Reasoning questions and answers with PDF downloads for practice.",
            "3",
        ),
        entry(
            "PrepInsta",
            &images.prep_insta_logo,
            "PrepInsta Logo",
            "Detailed syllabus, analytics, and practice questions for Cognizant GenC with placement courses and mock tests.",
            "4",
        ),
    ]
}

pub(crate) fn builtin() -> Catalog {
    use Difficulty::{Easy, Hard, Medium};

    let images = images();
    let resources = resources(&images);

    Catalog {
        headline: Headline {
            questions_analyzed: "115+".to_string(),
            categories: 4,
            duration_minutes: "60-90".to_string(),
            subtopics: "25+".to_string(),
        },
        citations: citations(),
        images,
        topic_distribution: vec![
            distribution("Quantitative Aptitude", 45, 40, "#3b82f6"),
            distribution("Logical Reasoning", 35, 30, "#10b981"),
            distribution("Verbal Ability", 25, 22, "#f59e0b"),
            distribution("Data Interpretation", 10, 8, "#ef4444"),
        ],
        skill_scores: vec![
            skill("Mathematical Skills", 85),
            skill("Logical Thinking", 78),
            skill("Pattern Recognition", 82),
            skill("Language Skills", 75),
            skill("Data Analysis", 70),
            skill("Problem Solving", 88),
        ],
        quantitative_topics: vec![
            subtopic("Time & Distance", 8, Medium),
            subtopic("Percentages", 6, Easy),
            subtopic("Work & Time", 7, Medium),
            subtopic("Probability", 5, Hard),
            subtopic("Mensuration", 4, Medium),
            subtopic("Ratio & Proportion", 5, Easy),
            subtopic("Number System", 6, Medium),
            subtopic("Simple Interest", 4, Easy),
        ],
        quantitative_samples: quantitative_samples(),
        quantitative_coverage: vec![
            coverage("Simple Interest", 4, Easy, "SI = PRT/100, Amount calculation"),
            coverage("Probability", 5, Hard, "Combinations, Independent events"),
            coverage("Mensuration", 4, Medium, "Area, Volume, Surface area"),
            coverage("Number System", 6, Medium, "HCF, LCM, Remainders, Divisibility"),
        ],
        reasoning_topics: vec![
            subtopic("Syllogisms", 8, Hard),
            subtopic("Coding-Decoding", 6, Medium),
            subtopic("Blood Relations", 5, Medium),
            subtopic("Series Completion", 7, Medium),
            subtopic("Analogies", 5, Easy),
            subtopic("Classification", 4, Easy),
        ],
        reasoning_samples: reasoning_samples(),
        reasoning_core_topics: strings(&[
            "Statements and Conclusions",
            "Statements and Arguments",
            "Blood Relations",
            "Directional Sense",
            "Coding and Decoding",
            "Analogies",
            "Classification (Odd Man Out)",
            "Series Completion",
        ]),
        reasoning_advanced_topics: strings(&[
            "Analytical Reasoning",
            "Decision Making",
            "Critical Reasoning",
            "Data Sufficiency",
            "Seating Arrangements",
            "Logical Word Sequence",
            "Pattern Recognition",
            "Rule Detection",
        ]),
        verbal_topics: vec![
            TopicCount { name: "Sentence Completion".to_string(), questions: 8 },
            TopicCount { name: "Vocabulary (Synonyms/Antonyms)".to_string(), questions: 6 },
            TopicCount { name: "Reading Comprehension".to_string(), questions: 7 },
            TopicCount { name: "Grammar & Error Detection".to_string(), questions: 4 },
        ],
        verbal_skills: strings(&[
            "English Language Proficiency",
            "Comprehension Skills",
            "Grammar Knowledge",
            "Vocabulary Range",
            "Inference Making",
            "Context Understanding",
        ]),
        verbal_samples: verbal_samples(),
        trend: [
            ("Jan", 4000, 2400),
            ("Feb", 3000, 1398),
            ("Mar", 2000, 9800),
            ("Apr", 2780, 3908),
            ("May", 1890, 4800),
            ("Jun", 2390, 3800),
        ]
        .into_iter()
        .map(|(month, sales, profit)| TrendPoint {
            month: month.to_string(),
            sales,
            profit,
        })
        .collect(),
        resources,
    }
}
