//! Default site content: team, advantages, stats, and all six page
//! sections with the launch copy.
//!
//! [`seed_defaults`] resets the four content tables to this baseline
//! (applications are never touched). Invoked by the `seed` binary; a
//! rerun restores the defaults rather than duplicating them.

use sqlx::PgPool;

/// Replace the content tables with the default rows.
pub async fn seed_defaults(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM team_members").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM advantages").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM stats").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM content_sections").execute(&mut *tx).await?;

    let team: &[(&str, &str, &str, &str, i32)] = &[
        (
            "Олександр Коваленко",
            "Head Trader",
            "ОК",
            "10+ років досвіду на ринках. Спеціалізується на криптовалютах та деривативах.",
            0,
        ),
        (
            "Марія Шевченко",
            "Senior Analyst",
            "МШ",
            "Експерт з технічного аналізу та розробки торгових стратегій.",
            1,
        ),
        (
            "Андрій Мельник",
            "Risk Manager",
            "АМ",
            "Фахівець з управління ризиками та оптимізації торгових портфелів.",
            2,
        ),
        (
            "Катерина Бондаренко",
            "Trading Coach",
            "КБ",
            "Наставник та тренер для нових членів команди. 8 років у трейдингу.",
            3,
        ),
    ];
    for (name, role, initials, description, sort_order) in team {
        sqlx::query(
            "INSERT INTO team_members (name, role, initials, description, sort_order)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(name)
        .bind(role)
        .bind(initials)
        .bind(description)
        .bind(sort_order)
        .execute(&mut *tx)
        .await?;
    }

    let advantages: &[(&str, &str, &str, &str, i32)] = &[
        (
            "Високий дохід",
            "Конкурентна заробітна плата з можливістю отримання бонусів за результати торгівлі",
            "TrendingUp",
            "text-primary",
            0,
        ),
        (
            "Фінансова стабільність",
            "Гарантована оплата праці, своєчасні виплати та прозора система нарахувань",
            "Wallet",
            "text-accent",
            1,
        ),
        (
            "Професійна команда",
            "Робота з досвідченими трейдерами та можливість обміну знаннями",
            "Users",
            "text-primary",
            2,
        ),
        (
            "Навчання та розвиток",
            "Безкоштовне навчання, тренінги та доступ до професійних інструментів аналізу",
            "GraduationCap",
            "text-secondary",
            3,
        ),
        (
            "Гнучкий графік",
            "Можливість працювати віддалено та обирати зручний для себе графік роботи",
            "Clock",
            "text-accent",
            4,
        ),
        (
            "Безпека та підтримка",
            "Повна юридична підтримка, безпечні умови праці та страхування",
            "Shield",
            "text-primary",
            5,
        ),
    ];
    for (title, description, icon, color, sort_order) in advantages {
        sqlx::query(
            "INSERT INTO advantages (title, description, icon, color, sort_order)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(title)
        .bind(description)
        .bind(icon)
        .bind(color)
        .bind(sort_order)
        .execute(&mut *tx)
        .await?;
    }

    let stats: &[(&str, &str, i32)] = &[
        ("50+", "Трейдерів", 0),
        ("5+", "Років на ринку", 1),
        ("24/7", "Підтримка", 2),
    ];
    for (value, label, sort_order) in stats {
        sqlx::query("INSERT INTO stats (value, label, sort_order) VALUES ($1, $2, $3)")
            .bind(value)
            .bind(label)
            .bind(sort_order)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query(
        "INSERT INTO content_sections (section, title, subtitle, button_text)
         VALUES ('hero', 'BULL',
                 'Шукаємо співробітників з України від 18 років з базовими навичками у трейдингу',
                 'Залишити заявку')",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO content_sections
            (section, title, title_highlight, paragraph1, paragraph2, paragraph3)
         VALUES ('about', 'Про', 'компанію', $1, $2, $3)",
    )
    .bind(
        "<span class='text-primary font-semibold'>BULL trading</span> — це динамічна команда \
         професійних трейдерів, які спеціалізуються на торгівлі на фінансових ринках.",
    )
    .bind(
        "Ми пропонуємо унікальну можливість для молодих талантів з України розвивати свої \
         навички у трейдингу та досягати фінансового успіху разом з досвідченими наставниками.",
    )
    .bind(
        "Наша місія — створити середовище, де кожен член команди може розкрити свій потенціал, \
         отримати професійний розвиток та досягти високих результатів на ринку.",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO content_sections (section, title, subtitle)
         VALUES ('advantages', 'Наші переваги',
                 'Ми створюємо найкращі умови для професійного розвитку та успішної кар''єри у трейдингу')",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO content_sections (section, title, subtitle)
         VALUES ('team', 'Наша команда',
                 'Досвідчені професіонали, готові поділитися своїми знаннями та допомогти вам досягти успіху')",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO content_sections (section, title, title_highlight, subtitle)
         VALUES ('contact', 'Стань частиною', 'команди',
                 'Заповни форму і ми зв''яжемося з тобою для обговорення деталей співпраці')",
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO content_sections
            (section, description, phone, email, instagram, telegram, viber, facebook)
         VALUES ('footer',
                 'Професійна команда трейдерів для вашого успіху на фінансових ринках',
                 '+380 12 345 67 89', 'info@bulltrading.com', '#', '#', '#', '#')",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await
}
