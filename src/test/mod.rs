mod transit_log;
