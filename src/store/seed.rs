//! Built-in records used when nothing usable is persisted.

use crate::models::{
    Challenge, ChallengeType, Contest, ContestAttempt, DataBundle, Difficulty, Event, ForumReply,
    ForumTopic, User, UserProgress, UserRole,
};
use chrono::Utc;
use serde_json::Map;

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    username: &str,
    email: &str,
    password: &str,
    score: f64,
    join_date: &str,
    role: UserRole,
    student_id: Option<&str>,
) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        score,
        role,
        join_date: join_date.to_string(),
        student_id: student_id.map(str::to_string),
        extra: Map::new(),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "1",
            "AIExplorer",
            "explorer@vaic.com",
            "explorer123",
            150.0,
            "2024-01-15",
            UserRole::User,
            Some("SV001"),
        ),
        user(
            "2",
            "TechWizard",
            "wizard@vaic.com",
            "wizard456",
            120.0,
            "2024-01-20",
            UserRole::User,
            Some("SV002"),
        ),
        user(
            "3",
            "DataMaster",
            "master@vaic.com",
            "master789",
            180.0,
            "2024-01-10",
            UserRole::User,
            Some("SV003"),
        ),
        user(
            "admin",
            "Admin",
            "admin@vaic.com",
            "admin2024",
            999.0,
            "2024-01-01",
            UserRole::Admin,
            None,
        ),
    ]
}

fn contest(
    id: &str,
    title: &str,
    description: &str,
    time_limit: f64,
    max_attempts: f64,
) -> Contest {
    Contest {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        challenges: Vec::new(),
        time_limit,
        start_date: "2024-01-01".to_string(),
        end_date: "2024-12-31".to_string(),
        is_active: true,
        max_attempts,
        created_by: "admin".to_string(),
        is_public: true,
        extra: Map::new(),
    }
}

pub fn contests() -> Vec<Contest> {
    vec![
        contest(
            "contest1",
            "Kiến thức AI cơ bản",
            "Cuộc thi kiểm tra kiến thức cơ bản về trí tuệ nhân tạo và machine learning",
            30.0,
            3.0,
        ),
        contest(
            "contest2",
            "Python cho AI",
            "Thử thách về việc sử dụng Python trong các dự án AI",
            20.0,
            2.0,
        ),
    ]
}

fn challenge(
    id: &str,
    question: &str,
    options: Option<&[&str]>,
    correct_answer: &str,
    points: f64,
    difficulty: Difficulty,
    contest_id: &str,
) -> Challenge {
    let kind = if options.is_some() {
        ChallengeType::MultipleChoice
    } else {
        ChallengeType::Text
    };

    Challenge {
        id: id.to_string(),
        question: question.to_string(),
        kind,
        options: options.map(|opts| opts.iter().map(|o| o.to_string()).collect()),
        correct_answer: correct_answer.to_string(),
        points,
        difficulty,
        contest_id: contest_id.to_string(),
        extra: Map::new(),
    }
}

pub fn challenges() -> Vec<Challenge> {
    vec![
        challenge(
            "1",
            "AI là viết tắt của từ gì?",
            Some(&[
                "Artificial Intelligence",
                "Automated Intelligence",
                "Advanced Intelligence",
                "Applied Intelligence",
            ]),
            "Artificial Intelligence",
            10.0,
            Difficulty::Easy,
            "contest1",
        ),
        challenge(
            "2",
            "Thuật toán nào thường được sử dụng cho nhận dạng hình ảnh?",
            Some(&[
                "Linear Regression",
                "Convolutional Neural Network",
                "Decision Tree",
                "K-Means",
            ]),
            "Convolutional Neural Network",
            20.0,
            Difficulty::Medium,
            "contest1",
        ),
        challenge(
            "3",
            "Giải thích khái niệm overfitting trong machine learning.",
            None,
            "overfitting",
            30.0,
            Difficulty::Hard,
            "contest1",
        ),
        challenge(
            "4",
            "Python được sử dụng phổ biến trong AI vì lý do gì?",
            Some(&[
                "Dễ học và sử dụng",
                "Có nhiều thư viện AI",
                "Cộng đồng lớn",
                "Tất cả các lý do trên",
            ]),
            "Tất cả các lý do trên",
            15.0,
            Difficulty::Easy,
            "contest2",
        ),
        challenge(
            "5",
            "TensorFlow là gì?",
            None,
            "framework",
            25.0,
            Difficulty::Medium,
            "contest2",
        ),
    ]
}

pub fn contest_attempts() -> Vec<ContestAttempt> {
    Vec::new()
}

pub fn user_progress() -> Vec<UserProgress> {
    Vec::new()
}

pub fn events() -> Vec<Event> {
    vec![Event {
        id: "1".to_string(),
        title: "Workshop: Giới thiệu về Machine Learning".to_string(),
        content: "Tham gia workshop miễn phí về Machine Learning dành cho người mới bắt đầu. \
                  Chúng ta sẽ cùng nhau khám phá:\n\n\
                  • Khái niệm cơ bản về ML\n\
                  • Các thuật toán phổ biến\n\
                  • Thực hành với Python\n\
                  • Q&A với chuyên gia\n\n\
                  Thời gian: 14:00 - 17:00, Thứ 7 tuần tới\n\
                  Địa điểm: Phòng hội thảo A1, Tòa nhà VAIC\n\n\
                  Đăng ký ngay để không bỏ lỡ cơ hội học hỏi!"
            .to_string(),
        author: "admin".to_string(),
        author_name: "Admin".to_string(),
        created_at: "2024-01-20T10:00:00Z".to_string(),
        updated_at: "2024-01-20T10:00:00Z".to_string(),
        is_published: true,
        tags: vec![
            "workshop".to_string(),
            "machine learning".to_string(),
            "beginner".to_string(),
        ],
        extra: Map::new(),
    }]
}

pub fn forum_topics() -> Vec<ForumTopic> {
    vec![ForumTopic {
        id: "1".to_string(),
        title: "Thảo luận về tương lai của AI trong giáo dục".to_string(),
        content: "AI đang thay đổi cách chúng ta học và dạy. Các bạn nghĩ sao về việc ứng dụng \
                  AI trong giáo dục? Những lợi ích và thách thức là gì?"
            .to_string(),
        author: "1".to_string(),
        author_name: "AIExplorer".to_string(),
        created_at: "2024-01-18T09:00:00Z".to_string(),
        updated_at: "2024-01-18T09:00:00Z".to_string(),
        replies: vec![ForumReply {
            id: "1".to_string(),
            content: "Tôi nghĩ AI sẽ giúp cá nhân hóa việc học tập và làm cho giáo dục trở nên \
                      hiệu quả hơn. Tuy nhiên, chúng ta cũng cần cân nhắc về tính tương tác con \
                      người."
                .to_string(),
            author: "2".to_string(),
            author_name: "TechWizard".to_string(),
            created_at: "2024-01-18T10:30:00Z".to_string(),
            topic_id: "1".to_string(),
            extra: Map::new(),
        }],
        tags: vec![
            "AI".to_string(),
            "education".to_string(),
            "future".to_string(),
        ],
        is_pinned: true,
        extra: Map::new(),
    }]
}

/// The complete seed bundle, stamped with the current time.
pub fn default_bundle() -> DataBundle {
    DataBundle {
        users: users(),
        contests: contests(),
        challenges: challenges(),
        contest_attempts: contest_attempts(),
        user_progress: user_progress(),
        events: events(),
        forum_topics: forum_topics(),
        last_updated: Utc::now(),
        extra: Map::new(),
    }
}
