pub const MAIN_MENU: &str = "\
+----------------------------------------+
| ************ Main Menu *************** |
+----------------------------------------+
| 1. Admin Signup                        |
| 2. User Signup                         |
| 3. Admin Login                         |
| 4. User Login                          |
| 5. Exit                                |
+----------------------------------------+
";

pub const ADMIN_MENU: &str = "\
+----------------------------------------+
| ************ Admin Menu ************** |
+----------------------------------------+
| 1. Add Question                        |
| 2. Edit Question                       |
| 3. Delete Question                     |
| 4. View All Questions                  |
| 5. View Scores                         |
| 6. Generate Report                     |
| 7. Logout                              |
+----------------------------------------+
";

pub const USER_MENU: &str = "\
+----------------------------------------+
| ************ User Menu *************** |
+----------------------------------------+
| 1. Take Quiz                           |
| 2. View Scores                         |
| 3. Reset Password                      |
| 4. Logout                              |
+----------------------------------------+
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    SignupAdmin = 1,
    SignupUser = 2,
    LoginAdmin = 3,
    LoginUser = 4,
    Exit = 5,
}

impl TryFrom<i64> for MainChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::SignupAdmin),
            2 => Ok(Self::SignupUser),
            3 => Ok(Self::LoginAdmin),
            4 => Ok(Self::LoginUser),
            5 => Ok(Self::Exit),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminChoice {
    AddQuestion = 1,
    EditQuestion = 2,
    DeleteQuestion = 3,
    ViewAllQuestions = 4,
    ViewScores = 5,
    GenerateReport = 6,
    Logout = 7,
}

impl TryFrom<i64> for AdminChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::AddQuestion),
            2 => Ok(Self::EditQuestion),
            3 => Ok(Self::DeleteQuestion),
            4 => Ok(Self::ViewAllQuestions),
            5 => Ok(Self::ViewScores),
            6 => Ok(Self::GenerateReport),
            7 => Ok(Self::Logout),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    TakeQuiz = 1,
    ViewScores = 2,
    ResetPassword = 3,
    Logout = 4,
}

impl TryFrom<i64> for UserChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::TakeQuiz),
            2 => Ok(Self::ViewScores),
            3 => Ok(Self::ResetPassword),
            4 => Ok(Self::Logout),
            other => Err(other),
        }
    }
}
