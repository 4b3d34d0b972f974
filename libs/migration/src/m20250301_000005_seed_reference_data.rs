use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Role ids are fixed: accounts created before an explicit role is chosen
/// fall back to whichever id `member` resolves to at startup.
const SEED_SQL: &str = r#"
INSERT INTO roles (role_id, role_name) VALUES
    (1, 'member'),
    (2, 'staff'),
    (3, 'admin')
ON CONFLICT (role_id) DO NOTHING;

INSERT INTO countries (country_id, country_name, iso_alpha3) VALUES
    (1, 'Belgium', 'BEL')
ON CONFLICT (country_id) DO NOTHING;

INSERT INTO localities (locality_id, postal_code, town, sub_town, main_town, province, fk_country_id) VALUES
    (1, '1000', 'Bruxelles', NULL, 'Bruxelles', 'Bruxelles', 1),
    (2, '1300', 'Wavre', NULL, 'Wavre', 'Brabant Wallon', 1),
    (3, '4000', 'Liège', NULL, 'Liège', 'Liège', 1),
    (4, '5000', 'Namur', NULL, 'Namur', 'Namur', 1),
    (5, '6000', 'Charleroi', NULL, 'Charleroi', 'Hainaut', 1),
    (6, '7000', 'Mons', NULL, 'Mons', 'Hainaut', 1),
    (7, '7500', 'Tournai', NULL, 'Tournai', 'Hainaut', 1)
ON CONFLICT (locality_id) DO NOTHING;

INSERT INTO sports (sport_id, sport_label, active) VALUES
    (1, 'Badminton', true),
    (2, 'Squash', true),
    (3, 'Table tennis', false)
ON CONFLICT (sport_id) DO NOTHING;

INSERT INTO halls (hall_id, label_hall, active) VALUES
    (1, 'Main hall', true)
ON CONFLICT (hall_id) DO NOTHING;

INSERT INTO fields (field_id, label_field, active, fk_hall_id) VALUES
    (1, 'Court 1', true, 1),
    (2, 'Court 2', true, 1)
ON CONFLICT (field_id) DO NOTHING;

INSERT INTO sport_field (sport_field_id, fk_field_id, fk_sport_id) VALUES
    (1, 1, 1),
    (2, 2, 1),
    (3, 2, 2)
ON CONFLICT (sport_field_id) DO NOTHING;

INSERT INTO time_slots (time_slot_id, time_slot) VALUES
    (1, '08:00-09:00'),
    (2, '09:00-10:00'),
    (3, '18:00-19:00'),
    (4, '19:00-20:00')
ON CONFLICT (time_slot_id) DO NOTHING;
"#;

/// Serial sequences must start past the explicit ids above.
const SYNC_SEQUENCES_SQL: &str = r#"
SELECT setval(pg_get_serial_sequence('roles', 'role_id'), (SELECT MAX(role_id) FROM roles));
SELECT setval(pg_get_serial_sequence('countries', 'country_id'), (SELECT MAX(country_id) FROM countries));
SELECT setval(pg_get_serial_sequence('localities', 'locality_id'), (SELECT MAX(locality_id) FROM localities));
SELECT setval(pg_get_serial_sequence('sports', 'sport_id'), (SELECT MAX(sport_id) FROM sports));
SELECT setval(pg_get_serial_sequence('halls', 'hall_id'), (SELECT MAX(hall_id) FROM halls));
SELECT setval(pg_get_serial_sequence('fields', 'field_id'), (SELECT MAX(field_id) FROM fields));
SELECT setval(pg_get_serial_sequence('sport_field', 'sport_field_id'), (SELECT MAX(sport_field_id) FROM sport_field));
SELECT setval(pg_get_serial_sequence('time_slots', 'time_slot_id'), (SELECT MAX(time_slot_id) FROM time_slots));
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SEED_SQL).await?;
        db.execute_unprepared(SYNC_SEQUENCES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DELETE FROM time_slots WHERE time_slot_id <= 4;
                DELETE FROM sport_field WHERE sport_field_id <= 3;
                DELETE FROM fields WHERE field_id <= 2;
                DELETE FROM halls WHERE hall_id = 1;
                DELETE FROM sports WHERE sport_id <= 3;
                DELETE FROM localities WHERE locality_id <= 7;
                DELETE FROM countries WHERE country_id = 1;
                DELETE FROM roles WHERE role_id <= 3;
                "#,
            )
            .await?;

        Ok(())
    }
}
