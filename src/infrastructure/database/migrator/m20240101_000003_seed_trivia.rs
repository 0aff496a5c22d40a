//! Seed the standard trivia data set

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_categories::Categories;
use super::m20240101_000002_create_questions::Questions;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Inserted in order, so they receive ids 1..=6.
pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, difficulty, category)
pub const QUESTIONS: [(&str, &str, i32, i32); 19] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, 5),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, 5),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, 2),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut categories = Query::insert()
            .into_table(Categories::Table)
            .columns([Categories::Type])
            .to_owned();
        for kind in CATEGORIES {
            categories.values_panic([kind.into()]);
        }
        manager.exec_stmt(categories).await?;

        let mut questions = Query::insert()
            .into_table(Questions::Table)
            .columns([
                Questions::Question,
                Questions::Answer,
                Questions::Difficulty,
                Questions::Category,
            ])
            .to_owned();
        for (question, answer, difficulty, category) in QUESTIONS {
            questions.values_panic([
                question.into(),
                answer.into(),
                difficulty.into(),
                category.into(),
            ]);
        }
        manager.exec_stmt(questions).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Questions::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Categories::Table).to_owned())
            .await
    }
}
