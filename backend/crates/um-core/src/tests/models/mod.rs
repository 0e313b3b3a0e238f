mod user_fields;
