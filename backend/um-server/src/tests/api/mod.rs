mod users_logging;
